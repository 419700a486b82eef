//! Policy-driven password generation on top of a cryptographically secure
//! random source.
//!
//! ```
//! use rand::rngs::OsRng;
//! use rust_passgen::{classify, generate, PolicyConfig, StrengthLabel};
//!
//! let policy = PolicyConfig { length: 20, ..PolicyConfig::default() };
//! let password = generate(&policy, &mut OsRng).unwrap();
//! assert_eq!(password.len(), 20);
//! assert_eq!(
//!     classify(policy.length, policy.enabled_class_count()),
//!     StrengthLabel::VeryStrong
//! );
//! ```

pub mod api;
pub mod config;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use generators::{classify, generate, GenerationError, PasswordGenerator};
pub use models::{CharClass, Coverage, GeneratedPassword, PolicyConfig, StrengthLabel};
