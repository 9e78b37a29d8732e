//! Width-aware truncation for single terminal lines.
//!
//! Widths are measured in terminal columns, so wide characters count twice.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Control characters such as embedded newlines become spaces so the
/// result always occupies one terminal line. Text that already fits is
/// otherwise returned unchanged. Widths of three columns or fewer cannot
/// hold any text next to the ellipsis and yield dots only.
///
/// # Examples
///
/// ```rust,ignore
/// use issuedeck::tui::components::text_truncate::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Crash on startup", 10), "Crash o...");
/// ```
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let single_line: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    if single_line.width() <= max_width {
        return single_line;
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let mut truncated = String::new();
    let mut used = 0;
    for ch in single_line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        truncated.push(ch);
        used += char_width;
    }
    truncated.push_str(ELLIPSIS);
    truncated
}
