// src/generators/strength.rs
use crate::models::StrengthLabel;

/// Classify a policy by its length and how many classes it enables.
/// The generated content itself is never inspected.
pub fn classify(length: usize, enabled_class_count: usize) -> StrengthLabel {
    if length >= 16 && enabled_class_count >= 3 {
        StrengthLabel::VeryStrong
    } else if length >= 12 && enabled_class_count >= 3 {
        StrengthLabel::Strong
    } else if length >= 8 && enabled_class_count >= 2 {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Weak
    }
}
