use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::app::navigation::is_large_screen;
use crate::core::app::{App, Screen};
use crate::ui::screens::{about, chat, countdown};
use crate::ui::theme::Theme;

pub const DRAWER_WIDTH: u16 = 24;
const MENU_HINT: &str = "☰ Ctrl+B";

pub fn ui(f: &mut Frame, app: &mut App, theme: &Theme) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    render_header(f, chunks[0], app, theme);

    let body = chunks[1];
    if is_large_screen(area.width) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(DRAWER_WIDTH), Constraint::Min(0)])
            .split(body);
        render_drawer(f, columns[0], app, theme, Borders::RIGHT);
        render_content(f, columns[1], app, theme);
    } else {
        render_content(f, body, app, theme);
        if app.drawer.is_visible(area.width) {
            let overlay = Rect {
                width: DRAWER_WIDTH.min(body.width),
                ..body
            };
            f.render_widget(Clear, overlay);
            render_drawer(f, overlay, app, theme, Borders::ALL);
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut left = Vec::new();
    if !is_large_screen(f.area().width) {
        left.push(Span::styled(MENU_HINT, theme.muted_style));
        left.push(Span::raw("  "));
    }
    left.push(Span::styled(
        app.screen.header_title(),
        theme.header_title_style,
    ));
    f.render_widget(
        Paragraph::new(Line::from(left)).style(theme.header_style),
        area,
    );

    let right = match &app.status {
        Some(status) => Span::styled(status.clone(), theme.status_style),
        None => Span::styled(app.endpoint_label.clone(), theme.muted_style),
    };
    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        area,
    );
}

fn drawer_line(screen: Screen, app: &App, theme: &Theme) -> Line<'static> {
    let highlighted = app.drawer.is_focused() && app.drawer.highlighted() == screen;
    let style = if highlighted {
        theme.drawer_highlight_style
    } else if app.screen == screen {
        theme.drawer_current_style
    } else {
        theme.drawer_item_style
    };
    Line::styled(format!(" {} {}", screen.icon(), screen.label()), style)
}

fn render_drawer(f: &mut Frame, area: Rect, app: &App, theme: &Theme, borders: Borders) {
    let block = Block::default()
        .borders(borders)
        .border_style(theme.drawer_border_style)
        .title(Span::styled(" Solace ", theme.heading_style));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Screen::MAIN.len() as u16),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(Screen::FOOTER.len() as u16),
        ])
        .split(inner);

    let main: Vec<Line> = Screen::MAIN
        .iter()
        .map(|screen| drawer_line(*screen, app, theme))
        .collect();
    f.render_widget(Paragraph::new(main), sections[0]);

    let rule = "─".repeat(usize::from(inner.width));
    f.render_widget(
        Paragraph::new(Line::styled(rule, theme.drawer_border_style)),
        sections[2],
    );

    let footer: Vec<Line> = Screen::FOOTER
        .iter()
        .map(|screen| drawer_line(*screen, app, theme))
        .collect();
    f.render_widget(Paragraph::new(footer), sections[3]);
}

fn render_content(f: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    match app.screen {
        Screen::Chat => chat::render_chat(f, area, &mut app.chat, app.frame, theme),
        Screen::About => {
            about::render_about(f, area, app.endpoint_mode, &app.endpoint_label, theme)
        }
        _ => countdown::render_countdown(f, area, app, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::countdown::Countdown;
    use crate::ui::screens::test_support::{contains, render_to_rows};
    use chrono::NaiveDate;

    fn app() -> App {
        let now = NaiveDate::from_ymd_opt(2024, 11, 18)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        App::new(Countdown::default(), "local proxy", now)
    }

    fn render(app: &mut App, width: u16) -> Vec<String> {
        let theme = Theme::dark();
        render_to_rows(width, 30, |f| ui(f, app, &theme))
    }

    #[test]
    fn wide_terminal_pins_the_drawer() {
        let mut app = app();
        let rows = render(&mut app, 120);

        assert!(rows[0].contains("Chat"));
        assert!(rows[0].contains("local proxy"));
        assert!(!rows[0].contains("Ctrl+B"));
        assert!(contains(&rows, "Mood Tracker"));
        assert!(contains(&rows, "Add People"));
    }

    #[test]
    fn narrow_terminal_hides_drawer_until_toggled() {
        let mut app = app();
        let rows = render(&mut app, 80);
        assert!(rows[0].contains("Ctrl+B"));
        assert!(!contains(&rows, "Mood Tracker"));

        app.toggle_drawer(80);
        let rows = render(&mut app, 80);
        assert!(contains(&rows, "Mood Tracker"));
    }

    #[test]
    fn header_follows_active_screen() {
        let mut app = app();
        app.navigate(Screen::About);
        let rows = render(&mut app, 120);
        assert!(rows[0].contains("About This App"));

        app.navigate(Screen::AddPeople);
        let rows = render(&mut app, 120);
        assert!(rows[0].contains("Add People"));
        assert!(contains(&rows, "COMING SOON"));
    }

    #[test]
    fn status_replaces_endpoint_label() {
        let mut app = app();
        app.set_status("Could not open browser");
        let rows = render(&mut app, 120);
        assert!(rows[0].contains("Could not open browser"));
        assert!(!rows[0].contains("local proxy"));
    }
}
