use ratatui::{
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::core::backend::EndpointMode;
use crate::core::constants::{MODEL_NAME, MODEL_URL, VERSION};
use crate::ui::screens::centered_width;
use crate::ui::theme::Theme;

const CONTENT_WIDTH: u16 = 76;

const FEATURES: [&str; 4] = [
    "Private, judgement-free conversations",
    "Preset prompts to help you get started",
    "Mood tracking, goals and journaling on the way",
    "Works right in your terminal",
];

fn route_note(mode: EndpointMode, endpoint_label: &str) -> String {
    match mode {
        EndpointMode::Proxy => {
            format!("No API key needed: requests are relayed through {endpoint_label}.")
        }
        EndpointMode::Hosted => format!(
            "Requests go straight to {endpoint_label}, with a bearer token when one is configured."
        ),
    }
}

pub fn about_lines(mode: EndpointMode, endpoint_label: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("Solace", theme.heading_style),
        Line::raw("A calm place to talk things through with a supportive AI companion."),
        Line::default(),
        Line::styled("Model", theme.heading_style),
        Line::from(vec![
            Span::raw("Conversations are answered by "),
            Span::styled(MODEL_NAME, theme.countdown_value_style),
            Span::raw(", hosted on Hugging Face Spaces."),
        ]),
        Line::styled(MODEL_URL, theme.link_style),
        Line::default(),
        Line::styled("Features", theme.heading_style),
    ];
    lines.extend(
        FEATURES
            .iter()
            .map(|feature| Line::raw(format!("  • {feature}"))),
    );
    lines.extend([
        Line::default(),
        Line::raw(route_note(mode, endpoint_label)),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("o", theme.heading_style),
            Span::raw(" to open the model page in your browser."),
        ]),
        Line::default(),
        Line::styled(format!("solace {VERSION}"), theme.muted_style),
    ]);
    lines
}

pub fn render_about(
    f: &mut Frame,
    area: Rect,
    mode: EndpointMode,
    endpoint_label: &str,
    theme: &Theme,
) {
    let area = centered_width(area, CONTENT_WIDTH).inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    f.render_widget(
        Paragraph::new(about_lines(mode, endpoint_label, theme)).wrap(Wrap { trim: false }),
        area,
    );
}
