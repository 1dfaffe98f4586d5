use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::app::chat::{ChatState, PRESET_PROMPTS, WELCOME_TEXT};
use crate::core::message::Message;
use crate::ui::theme::Theme;
use crate::ui::wrap::{display_width, pad_to_width, wrap_text};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const THINKING_TEXT: &str = "Thinking...";

const MAX_INPUT_LINES: usize = 5;
const CHIP_GAP: usize = 2;

/// Widest a user bubble may grow, in cells: four fifths of the transcript.
pub fn bubble_max_width(width: u16) -> usize {
    (usize::from(width) * 4 / 5).max(4)
}

/// Pre-wrapped transcript lines for `messages` at `width` cells.
pub fn build_chat_lines(messages: &[Message], width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        if message.is_user() {
            push_user_bubble(&mut lines, &message.content, width, theme);
        } else {
            push_assistant_turn(&mut lines, &message.content, width, theme);
        }
    }

    lines
}

fn push_user_bubble(lines: &mut Vec<Line<'static>>, content: &str, width: u16, theme: &Theme) {
    // One cell of padding on each side inside the bubble.
    let text_width = bubble_max_width(width).saturating_sub(2).max(1);
    let wrapped = wrap_text(content, text_width);
    let inner = wrapped
        .iter()
        .map(|line| display_width(line))
        .max()
        .unwrap_or(0);

    for line in wrapped {
        let cell = format!(" {} ", pad_to_width(&line, inner));
        lines.push(
            Line::from(Span::styled(cell, theme.user_bubble_style)).alignment(Alignment::Right),
        );
    }
}

fn push_assistant_turn(lines: &mut Vec<Line<'static>>, content: &str, width: u16, theme: &Theme) {
    let rule = "─".repeat(usize::from(width));
    lines.push(Line::styled(rule.clone(), theme.rule_style));
    for line in wrap_text(content, usize::from(width)) {
        lines.push(Line::styled(line, theme.assistant_text_style));
    }
    lines.push(Line::styled(rule, theme.rule_style));
}

pub fn spinner_line(frame: u64, theme: &Theme) -> Line<'static> {
    let glyph = SPINNER_FRAMES[(frame % SPINNER_FRAMES.len() as u64) as usize];
    Line::from(vec![
        Span::styled(glyph.to_string(), theme.spinner_style),
        Span::raw(" "),
        Span::styled(THINKING_TEXT.to_string(), theme.muted_style),
    ])
}

/// Preset chips laid out greedily across as many rows as `width` needs.
pub fn chip_lines(width: u16, selected: Option<usize>, theme: &Theme) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new()];
    let mut row_width = 0;

    for (index, prompt) in PRESET_PROMPTS.iter().enumerate() {
        let chip = format!(" {prompt} ");
        let chip_width = display_width(&chip);
        let gap = if row_width == 0 { 0 } else { CHIP_GAP };

        if row_width > 0 && row_width + gap + chip_width > width {
            rows.push(Vec::new());
            row_width = 0;
        } else if gap > 0 {
            if let Some(row) = rows.last_mut() {
                row.push(Span::raw(" ".repeat(gap)));
            }
            row_width += gap;
        }

        let style = if selected == Some(index) {
            theme.chip_selected_style
        } else {
            theme.chip_style
        };
        if let Some(row) = rows.last_mut() {
            row.push(Span::styled(chip, style));
        }
        row_width += chip_width;
    }

    rows.into_iter()
        .map(|spans| Line::from(spans).alignment(Alignment::Center))
        .collect()
}

pub fn input_height(chat: &ChatState) -> u16 {
    let lines = chat.textarea().lines().len().clamp(1, MAX_INPUT_LINES);
    lines as u16 + 2
}

fn render_input(f: &mut Frame, area: Rect, chat: &ChatState, theme: &Theme) {
    let (title, border_style) = if chat.is_loading() {
        (" Waiting for a reply... ", theme.input_border_busy_style)
    } else {
        (
            " Enter send • Alt+Enter newline • Tab presets • Ctrl+C quit ",
            theme.input_border_style,
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, theme.input_title_style));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(chat.textarea(), inner);
}

pub fn render_chat(f: &mut Frame, area: Rect, chat: &mut ChatState, frame: u64, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(input_height(chat))])
        .split(area);

    if chat.has_messages() {
        render_transcript(f, chunks[0], chat, frame, theme);
    } else {
        render_empty_state(f, chunks[0], chat, theme);
    }
    render_input(f, chunks[1], chat, theme);
}

fn render_transcript(f: &mut Frame, area: Rect, chat: &mut ChatState, frame: u64, theme: &Theme) {
    let mut lines = build_chat_lines(chat.conversation().messages(), area.width, theme);
    if chat.is_loading() {
        lines.push(Line::default());
        lines.push(spinner_line(frame, theme));
    }

    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_offset = total.saturating_sub(area.height);
    chat.clamp_scroll(max_offset);
    let top = max_offset - chat.scroll_from_bottom();

    f.render_widget(Paragraph::new(lines).scroll((top, 0)), area);
}

fn render_empty_state(f: &mut Frame, area: Rect, chat: &ChatState, theme: &Theme) {
    let chips = chip_lines(area.width, chat.preset_cursor(), theme);
    let chip_rows = chips.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(chip_rows),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::styled(WELCOME_TEXT, theme.welcome_style)).alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(Paragraph::new(chips), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::test_support::{contains, render_to_rows};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn user_bubbles_are_right_aligned_and_capped() {
        let theme = Theme::dark();
        let long = "word ".repeat(40);
        let lines = build_chat_lines(&[Message::user(long)], 50, &theme);

        assert!(lines.len() > 1);
        for line in &lines {
            assert_eq!(line.alignment, Some(Alignment::Right));
            assert!(display_width(&text(line)) <= 40);
            assert_eq!(line.spans[0].style, theme.user_bubble_style);
        }
        let widths: Vec<usize> = lines.iter().map(|l| display_width(&text(l))).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn assistant_turns_sit_between_rules() {
        let theme = Theme::dark();
        let lines = build_chat_lines(
            &[Message::user("hi"), Message::assistant("hello there")],
            20,
            &theme,
        );

        // bubble, spacer, rule, text, rule
        assert_eq!(lines.len(), 5);
        assert_eq!(text(&lines[2]), "─".repeat(20));
        assert_eq!(text(&lines[3]), "hello there");
        assert_eq!(text(&lines[4]), "─".repeat(20));
    }

    #[test]
    fn chips_wrap_onto_extra_rows_when_narrow() {
        let theme = Theme::dark();
        assert_eq!(chip_lines(200, None, &theme).len(), 1);
        assert!(chip_lines(30, None, &theme).len() >= PRESET_PROMPTS.len());

        let selected = chip_lines(200, Some(1), &theme);
        let styled: Vec<_> = selected[0]
            .spans
            .iter()
            .filter(|span| span.style == theme.chip_selected_style)
            .collect();
        assert_eq!(styled.len(), 1);
        assert_eq!(styled[0].content, " Tell me about your features ");
    }

    #[test]
    fn spinner_cycles_frames() {
        let theme = Theme::dark();
        assert_eq!(text(&spinner_line(0, &theme)), "⠋ Thinking...");
        assert_eq!(text(&spinner_line(11, &theme)), "⠙ Thinking...");
    }

    #[test]
    fn empty_chat_shows_welcome_and_presets() {
        let mut chat = ChatState::new();
        let theme = Theme::dark();
        let rows = render_to_rows(100, 20, |f| {
            let area = f.area();
            render_chat(f, area, &mut chat, 0, &theme)
        });

        assert!(contains(&rows, WELCOME_TEXT));
        assert!(contains(&rows, "How can you help me?"));
    }

    #[test]
    fn transcript_follows_latest_message() {
        let mut chat = ChatState::new();
        for i in 0..15 {
            chat.set_input_text(&format!("question {i}"));
            chat.submit();
            chat.receive(Message::assistant(format!("answer {i}")));
        }
        let theme = Theme::dark();

        let rows = render_to_rows(40, 12, |f| {
            let area = f.area();
            render_chat(f, area, &mut chat, 0, &theme)
        });
        assert!(contains(&rows, "answer 14"));
        assert!(!contains(&rows, "question 0 "));

        chat.scroll_up(u16::MAX);
        let rows = render_to_rows(40, 12, |f| {
            let area = f.area();
            render_chat(f, area, &mut chat, 0, &theme)
        });
        assert!(contains(&rows, "question 0"));
        assert!(chat.scroll_from_bottom() < u16::MAX);
    }

    #[test]
    fn loading_shows_spinner() {
        let mut chat = ChatState::new();
        chat.set_input_text("hello");
        chat.submit();
        let theme = Theme::dark();

        let rows = render_to_rows(40, 12, |f| {
            let area = f.area();
            render_chat(f, area, &mut chat, 0, &theme)
        });
        assert!(contains(&rows, THINKING_TEXT));
        assert!(contains(&rows, "Waiting for a reply"));
    }
}
