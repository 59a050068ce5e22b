//! Formatting utilities for terminal output

use crate::core::Color;

/// Revealed letters of a color as shown under the board
///
/// Revealed letters are listed alphabetically; a trailing `?` means the color
/// still owns letters nobody has seen. A color that owns nothing says so.
#[must_use]
pub fn letter_display(color: &Color) -> String {
    if color.assigned().is_empty() {
        return "no letters".to_string();
    }
    if color.revealed().is_empty() {
        return "?".to_string();
    }

    let mut parts: Vec<String> = color.revealed().iter().map(String::from).collect();
    if color.hidden_count() > 0 {
        parts.push("?".to_string());
    }
    parts.join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a fraction in [0, 1] as a percentage bar
#[must_use]
pub fn share_bar(share: f64, width: usize) -> String {
    create_progress_bar(share, 1.0, width)
}
