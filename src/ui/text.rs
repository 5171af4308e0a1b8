//! Width-aware text fitting for fixed-size cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `width` display columns, ending with `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns. The
/// last line is truncated when text remains.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if width == 0 || max_lines == 0 {
        return lines;
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut current = String::new();
    let mut i = 0;
    while i < words.len() {
        let word = words[i];
        let candidate_width = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if candidate_width <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            i += 1;
            continue;
        }
        if current.is_empty() {
            // A single word longer than the line.
            current = truncate(word, width);
            i += 1;
        }
        if lines.len() + 1 == max_lines {
            let rest = std::iter::once(current.as_str())
                .chain(words[i..].iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(truncate(&rest, width));
            return lines;
        }
        lines.push(std::mem::take(&mut current));
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Center `text` within `width` columns by left-padding.
pub fn centered_offset(text_width: usize, width: usize) -> usize {
    width.saturating_sub(text_width) / 2
}
