//! Content area renderers, one per kind of screen.

pub mod about;
pub mod chat;
pub mod countdown;

use ratatui::layout::Rect;

/// Horizontally centered sub-rect no wider than `width`.
pub fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
