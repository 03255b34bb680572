//! Display-width aware string fitting for fixed-width cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Alignment;

const ELLIPSIS: char = '…';

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Longest prefix of `s` no wider than `max` columns.
fn fitting_prefix(s: &str, max: usize) -> &str {
    let mut width = 0;
    for (at, c) in s.char_indices() {
        width += char_width(c);
        if width > max {
            return &s[..at];
        }
    }
    s
}

/// Cut `s` to `max_width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = fitting_prefix(s, max_width - 1).to_string();
    out.push(ELLIPSIS);
    out
}

/// Truncate or pad `s` to exactly `width` display columns.
pub fn align_to_width(s: &str, width: usize, align: Alignment) -> String {
    let text = truncate_to_width(s, width);
    let gap = width.saturating_sub(display_width(&text));

    let (left, right) = match align {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Greedy word wrap. Blank input lines are kept; words wider than
/// `max_width` are split across lines.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut wrap = Wrap {
        max: max_width,
        lines: Vec::new(),
        line: String::new(),
        width: 0,
    };
    for paragraph in s.split('\n') {
        if paragraph.trim().is_empty() {
            wrap.lines.push(String::new());
            continue;
        }
        paragraph.split_whitespace().for_each(|word| wrap.push_word(word));
        wrap.end_line();
    }

    if wrap.lines.is_empty() {
        wrap.lines.push(String::new());
    }
    wrap.lines
}

struct Wrap {
    max: usize,
    lines: Vec<String>,
    line: String,
    width: usize,
}

impl Wrap {
    fn push_word(&mut self, word: &str) {
        let word_width = display_width(word);
        let needed = if self.line.is_empty() {
            word_width
        } else {
            self.width + 1 + word_width
        };
        if needed <= self.max {
            if !self.line.is_empty() {
                self.line.push(' ');
            }
            self.line.push_str(word);
            self.width = needed;
            return;
        }

        self.end_line();
        let mut rest = word;
        while display_width(rest) > self.max {
            // Always take at least one char, even one wider than the line.
            let first = rest.chars().next().map_or(0, char::len_utf8);
            let cut = fitting_prefix(rest, self.max).len().max(first);
            self.lines.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }
        self.line = rest.to_string();
        self.width = display_width(rest);
    }

    fn end_line(&mut self) {
        if !self.line.is_empty() {
            self.lines.push(std::mem::take(&mut self.line));
            self.width = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Paperworks Inc.", 8), "Paperwo…");
        assert_eq!(truncate_to_width("short", 8), "short");
    }

    #[test]
    fn test_align_pads_to_width() {
        assert_eq!(align_to_width("42", 5, Alignment::Right), "   42");
        assert_eq!(align_to_width("42", 5, Alignment::Left), "42   ");
        assert_eq!(align_to_width("ab", 6, Alignment::Center), "  ab  ");
    }

    #[test]
    fn test_wide_chars_count_double() {
        assert_eq!(display_width("👍"), 2);
        assert_eq!(display_width(&align_to_width("👍", 4, Alignment::Left)), 4);
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("please review the attached invoice", 12),
            vec!["please", "review the", "attached", "invoice"]
        );
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        assert_eq!(wrap_words("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }
}
