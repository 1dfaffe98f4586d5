use ratatui::style::{Color, Modifier, Style};

/// Lavender accent used for headings, selection and the progress bar.
pub const ACCENT: Color = Color::Rgb(0xA7, 0x8B, 0xFA);
const ACCENT_DIM: Color = Color::Rgb(0x4C, 0x3F, 0x74);
const BUBBLE_GREY: Color = Color::Rgb(0x3A, 0x3A, 0x40);
const TEXT: Color = Color::Rgb(0xE6, 0xE6, 0xEB);
const MUTED: Color = Color::Rgb(0x8A, 0x8A, 0x96);

#[derive(Debug, Clone)]
pub struct Theme {
    pub background_color: Color,

    // Chrome
    pub header_style: Style,
    pub header_title_style: Style,
    pub status_style: Style,
    pub drawer_border_style: Style,
    pub drawer_item_style: Style,
    pub drawer_current_style: Style,
    pub drawer_highlight_style: Style,

    // Chat
    pub user_bubble_style: Style,
    pub assistant_text_style: Style,
    pub rule_style: Style,
    pub welcome_style: Style,
    pub chip_style: Style,
    pub chip_selected_style: Style,
    pub spinner_style: Style,
    pub input_border_style: Style,
    pub input_border_busy_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub placeholder_style: Style,

    // Countdown and about
    pub countdown_title_style: Style,
    pub countdown_value_style: Style,
    pub countdown_label_style: Style,
    pub gauge_style: Style,
    pub launched_style: Style,
    pub heading_style: Style,
    pub link_style: Style,
    pub muted_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background_color: Color::Reset,

            header_style: Style::default().fg(TEXT),
            header_title_style: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            status_style: Style::default().fg(Color::Yellow),
            drawer_border_style: Style::default().fg(ACCENT_DIM),
            drawer_item_style: Style::default().fg(TEXT),
            drawer_current_style: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            drawer_highlight_style: Style::default().fg(Color::Black).bg(ACCENT),

            user_bubble_style: Style::default().fg(TEXT).bg(BUBBLE_GREY),
            assistant_text_style: Style::default().fg(TEXT),
            rule_style: Style::default().fg(ACCENT_DIM),
            welcome_style: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            chip_style: Style::default().fg(ACCENT).bg(BUBBLE_GREY),
            chip_selected_style: Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
            spinner_style: Style::default().fg(ACCENT),
            input_border_style: Style::default().fg(ACCENT),
            input_border_busy_style: Style::default().fg(MUTED),
            input_title_style: Style::default().fg(MUTED),
            input_text_style: Style::default().fg(TEXT),
            placeholder_style: Style::default().fg(MUTED),

            countdown_title_style: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            countdown_value_style: Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            countdown_label_style: Style::default().fg(MUTED),
            gauge_style: Style::default().fg(ACCENT).bg(BUBBLE_GREY),
            launched_style: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            heading_style: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            link_style: Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::UNDERLINED),
            muted_style: Style::default().fg(MUTED),
        }
    }

    /// Palette-only variant for terminals without truecolor.
    pub fn basic() -> Self {
        Theme {
            header_title_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            drawer_border_style: Style::default().fg(Color::DarkGray),
            drawer_current_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            drawer_highlight_style: Style::default().fg(Color::Black).bg(Color::Magenta),
            user_bubble_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            rule_style: Style::default().fg(Color::DarkGray),
            welcome_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            chip_style: Style::default().fg(Color::Magenta).bg(Color::DarkGray),
            chip_selected_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            spinner_style: Style::default().fg(Color::Magenta),
            input_border_style: Style::default().fg(Color::Magenta),
            countdown_title_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            gauge_style: Style::default().fg(Color::Magenta).bg(Color::DarkGray),
            heading_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            link_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::UNDERLINED),
            ..Self::dark()
        }
    }

    /// Pick a palette from the `COLORTERM` hint terminals export.
    pub fn detect() -> Self {
        Self::for_colorterm(std::env::var("COLORTERM").ok().as_deref())
    }

    pub fn for_colorterm(colorterm: Option<&str>) -> Self {
        match colorterm.map(str::to_ascii_lowercase).as_deref() {
            Some("truecolor") | Some("24bit") => Self::dark(),
            _ => Self::basic(),
        }
    }
}
