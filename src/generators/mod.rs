// src/generators/mod.rs
mod charset;
mod password;
mod strength;

pub use charset::Charset;
pub use password::{generate, GenerationError, PasswordGenerator};
pub use strength::classify;
