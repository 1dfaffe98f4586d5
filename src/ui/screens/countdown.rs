use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::app::{App, Screen};
use crate::core::countdown::TimeLeft;
use crate::ui::screens::centered_width;
use crate::ui::theme::Theme;

pub const TITLE: &str = "COMING SOON";
pub const LAUNCHED_TEXT: &str = "Feature Available! 🎉";

/// Ticks per half bob cycle; at 100ms ticks the title rises for a second
/// and falls for a second.
const BOB_HALF_PERIOD: u64 = 10;
const CONTENT_WIDTH: u16 = 64;

/// Vertical offset of the title for the given animation frame.
pub fn bob_offset(frame: u64) -> u16 {
    if (frame / BOB_HALF_PERIOD) % 2 == 0 {
        0
    } else {
        1
    }
}

pub fn unit_blocks(remaining: TimeLeft) -> [(String, &'static str); 4] {
    [
        (format!("{:02}", remaining.days), "DAYS"),
        (format!("{:02}", remaining.hours), "HOURS"),
        (format!("{:02}", remaining.minutes), "MINUTES"),
        (format!("{:02}", remaining.seconds), "SECONDS"),
    ]
}

fn subtitle(screen: Screen) -> String {
    format!("{} is on its way.", screen.label())
}

pub fn render_countdown(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let area = centered_width(area, CONTENT_WIDTH);
    let snapshot = app.countdown_snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title_area = chunks[1];
    let offset = bob_offset(app.frame).min(title_area.height.saturating_sub(1));
    let title_row = Rect {
        y: title_area.y + offset,
        height: 1,
        ..title_area
    };
    f.render_widget(
        Paragraph::new(Line::styled(TITLE, theme.countdown_title_style)).alignment(Alignment::Center),
        title_row,
    );

    f.render_widget(
        Paragraph::new(Line::styled(subtitle(app.screen), theme.muted_style))
            .alignment(Alignment::Center),
        chunks[2],
    );

    if snapshot.launched {
        f.render_widget(
            Paragraph::new(Line::styled(LAUNCHED_TEXT, theme.launched_style))
                .alignment(Alignment::Center),
            chunks[4],
        );
    } else {
        render_unit_blocks(f, chunks[4], snapshot.remaining, theme);
    }

    let ratio = (app.displayed_progress() / 100.0).clamp(0.0, 1.0);
    f.render_widget(
        Gauge::default()
            .gauge_style(theme.gauge_style)
            .ratio(ratio)
            .label(format!("{:.0}%", app.displayed_progress())),
        chunks[6],
    );

    let caption = format!(
        "Launching {}",
        app.countdown().target().format("%B %-d, %Y")
    );
    f.render_widget(
        Paragraph::new(Line::styled(caption, theme.muted_style)).alignment(Alignment::Center),
        chunks[7],
    );
}

fn render_unit_blocks(f: &mut Frame, area: Rect, remaining: TimeLeft, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((value, label), column) in unit_blocks(remaining).into_iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.drawer_border_style);
        let body = Paragraph::new(vec![
            Line::styled(value, theme.countdown_value_style),
            Line::styled(label, theme.countdown_label_style),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(body, *column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::countdown::Countdown;
    use crate::ui::screens::test_support::{contains, render_to_rows};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn render(app: &App) -> Vec<String> {
        let theme = Theme::dark();
        render_to_rows(70, 16, |f| {
            let area = f.area();
            render_countdown(f, area, app, &theme)
        })
    }

    #[test]
    fn title_bobs_between_two_rows() {
        assert_eq!(bob_offset(0), 0);
        assert_eq!(bob_offset(9), 0);
        assert_eq!(bob_offset(10), 1);
        assert_eq!(bob_offset(20), 0);
    }

    #[test]
    fn units_are_zero_padded() {
        let blocks = unit_blocks(TimeLeft {
            days: 183,
            hours: 4,
            minutes: 0,
            seconds: 9,
        });
        assert_eq!(blocks[0], ("183".to_string(), "DAYS"));
        assert_eq!(blocks[1], ("04".to_string(), "HOURS"));
        assert_eq!(blocks[2], ("00".to_string(), "MINUTES"));
        assert_eq!(blocks[3], ("09".to_string(), "SECONDS"));
    }

    #[test]
    fn pending_launch_shows_time_blocks() {
        let mut app = App::new(Countdown::default(), "proxy", at(2025, 5, 10));
        app.navigate(Screen::Goals);
        let rows = render(&app);

        assert!(contains(&rows, TITLE));
        assert!(contains(&rows, "Goals is on its way."));
        assert!(contains(&rows, "DAYS"));
        assert!(contains(&rows, "SECONDS"));
        assert!(contains(&rows, "Launching May 20, 2025"));
        assert!(!contains(&rows, "Feature Available!"));
    }

    #[test]
    fn launched_feature_replaces_blocks() {
        let mut app = App::new(Countdown::default(), "proxy", at(2026, 1, 1));
        app.navigate(Screen::Journal);
        let rows = render(&app);

        assert!(contains(&rows, "Feature Available!"));
        assert!(!contains(&rows, "DAYS"));
    }
}
