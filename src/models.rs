// src/models.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four character classes a policy can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharClass {
    /// Fixed class order. Charset layout and the repair pass both follow it.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Lower => write!(f, "lowercase"),
            CharClass::Upper => write!(f, "uppercase"),
            CharClass::Digits => write!(f, "digits"),
            CharClass::Symbols => write!(f, "symbols"),
        }
    }
}

/// What to do when a policy asks for more classes than the password has
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// Repair as many classes as fit; the last repaired class wins.
    #[default]
    BestEffort,
    /// Refuse to generate.
    Strict,
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub coverage: Coverage,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            coverage: Coverage::BestEffort,
        }
    }
}

impl PolicyConfig {
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.include_lowercase,
            CharClass::Upper => self.include_uppercase,
            CharClass::Digits => self.include_digits,
            CharClass::Symbols => self.include_symbols,
        }
    }

    /// Enabled classes in the fixed class order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    pub fn enabled_class_count(&self) -> usize {
        CharClass::ALL
            .iter()
            .filter(|class| self.includes(**class))
            .count()
    }
}

/// A freshly generated password. Only the generator constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        GeneratedPassword(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 26);
    }

    #[test]
    fn alphabets_are_disjoint() {
        for (i, a) in CharClass::ALL.iter().enumerate() {
            for b in &CharClass::ALL[i + 1..] {
                assert!(
                    !a.alphabet().chars().any(|c| b.contains(c)),
                    "{} and {} overlap",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn enabled_classes_follow_fixed_order() {
        let config = PolicyConfig {
            include_lowercase: false,
            ..PolicyConfig::default()
        };
        assert_eq!(
            config.enabled_classes(),
            vec![CharClass::Upper, CharClass::Digits, CharClass::Symbols]
        );
        assert_eq!(config.enabled_class_count(), 3);
    }

    #[test]
    fn policy_deserializes_with_defaults() {
        let config: PolicyConfig =
            serde_json::from_str(r#"{"length": 24, "include_symbols": false, "coverage": "strict"}"#)
                .unwrap();
        assert_eq!(config.length, 24);
        assert!(config.include_uppercase);
        assert!(!config.include_symbols);
        assert_eq!(config.coverage, Coverage::Strict);
    }

    #[test]
    fn very_strong_displays_with_space() {
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
    }
}
