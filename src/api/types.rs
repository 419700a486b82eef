// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::StrengthLabel;

#[derive(Serialize, Deserialize, ToSchema, Debug, Default)]
pub struct PasswordGenerationRequest {
    /// Password length (default: configured default, usually 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include digits (default: true)
    pub include_digits: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Fail instead of under-covering when length is below the class count
    /// (default: configured value)
    pub strict: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength label for the requested policy
    pub strength: Option<StrengthLabel>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            password: None,
            strength: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct StrengthQuery {
    /// Password length
    pub length: usize,
    /// Number of enabled character classes
    pub classes: usize,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct StrengthResponse {
    /// Policy length that was classified
    pub length: usize,
    /// Number of enabled character classes
    pub classes: usize,
    /// Resulting strength label
    pub strength: StrengthLabel,
}
