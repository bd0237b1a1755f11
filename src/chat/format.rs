// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display formatting for chat messages
//!
//! Turns raw message text into the small HTML subset the widget renders.
//! Stored messages are never formatted in place.

use std::sync::OnceLock;

use regex::Regex;

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format message text for display.
///
/// Rules run in order over the escaped text: newline to `<br>`, `**x**` to
/// `<strong>`, then `*x*` to `<em>`. Matches are non-greedy and do not
/// overlap.
pub fn format_message(content: &str) -> String {
    static STRONG: OnceLock<Regex> = OnceLock::new();
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();

    let strong = STRONG.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
    let emphasis = EMPHASIS.get_or_init(|| Regex::new(r"\*(.*?)\*").unwrap());

    let text = escape_html(content).replace('\n', "<br>");
    let text = strong.replace_all(&text, "<strong>${1}</strong>");
    emphasis.replace_all(&text, "<em>${1}</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_becomes_break() {
        assert_eq!(format_message("a\nb"), "a<br>b");
    }

    #[test]
    fn test_strong() {
        assert_eq!(format_message("**x**"), "<strong>x</strong>");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(format_message("*x*"), "<em>x</em>");
    }

    #[test]
    fn test_strong_before_emphasis() {
        assert_eq!(
            format_message("**bold** and *soft*"),
            "<strong>bold</strong> and <em>soft</em>"
        );
    }

    #[test]
    fn test_markers_across_lines() {
        assert_eq!(format_message("**a\nb**"), "<strong>a<br>b</strong>");
    }

    #[test]
    fn test_unbalanced_marker_left_alone() {
        assert_eq!(format_message("2 * 3"), "2 * 3");
    }

    #[test]
    fn test_html_is_escaped() {
        assert_eq!(
            format_message("<b>hi</b> & *you*"),
            "&lt;b&gt;hi&lt;/b&gt; &amp; <em>you</em>"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(format_message("hello there"), "hello there");
    }
}
