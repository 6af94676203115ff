//! Formatting utilities used for terminal listings.

use crate::models::Employee;
use unicode_width::UnicodeWidthStr;

pub const MASKED_ID: &str = "*******";

pub fn format_pay(pay: f64) -> String {
    format!("${:.2}", pay)
}

/// Pad by display width, not byte length, so accented names line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Name as shown in the header: wrapped in `**` for master access.
pub fn display_name(e: &Employee) -> String {
    if e.has_master() {
        format!("**{}**", e.name)
    } else {
        e.name.clone()
    }
}
