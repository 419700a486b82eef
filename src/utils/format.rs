// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::StrengthLabel;

// Weak in red, Medium in yellow, Strong and above in green
pub fn styled_strength(label: StrengthLabel) -> StyledObject<String> {
    let text = style(label.to_string()).bold();
    match label {
        StrengthLabel::Weak => text.red(),
        StrengthLabel::Medium => text.yellow(),
        StrengthLabel::Strong | StrengthLabel::VeryStrong => text.green(),
    }
}

/// Framed block used when printing a single password.
pub fn framed(password: &str) -> String {
    let rule = "=".repeat(40);
    format!("{rule}\nYour generated password:\n{password}\n{rule}")
}
