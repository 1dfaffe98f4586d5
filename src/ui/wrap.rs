//! Word wrapping measured in terminal cells.
//!
//! Chat lines are wrapped up front so bubble widths and scroll extents are
//! known before anything is drawn.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Wrap `text` to at most `width` cells per line.
///
/// Explicit newlines always break. Words longer than a line are split at the
/// cell boundary. A blank paragraph yields one empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim_end_matches('\r'), width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = display_width(word);
        let gap = usize::from(line_width > 0);

        if line_width + gap + word_width <= width {
            if gap == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += gap + word_width;
            continue;
        }

        if line_width > 0 {
            out.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if line_width + ch_width > width && line_width > 0 {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += ch_width;
        }
    }

    out.push(line);
}

/// Right-pad `text` with spaces to exactly `width` cells.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn keeps_explicit_newlines_and_blank_paragraphs() {
        assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
        assert_eq!(wrap_text("", 20), vec![""]);
    }

    #[test]
    fn splits_words_longer_than_the_line() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn measures_wide_characters_in_cells() {
        let lines = wrap_text("你好世界", 4);
        assert_eq!(lines, vec!["你好", "世界"]);
        assert!(lines.iter().all(|line| display_width(line) <= 4));
    }

    #[test]
    fn pads_to_cell_width() {
        assert_eq!(pad_to_width("hi", 4), "hi  ");
        assert_eq!(pad_to_width("你", 3), "你 ");
        assert_eq!(pad_to_width("long", 2), "long");
    }
}
