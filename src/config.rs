// src/config.rs
use std::env;

use log::LevelFilter;
use thiserror::Error;

use crate::models::{Coverage, PolicyConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Password length must be between {min} and {max} characters (got {length})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
}

// Configuration for the generator front ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub strict_coverage: bool,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            min_password_length: 8,
            max_password_length: 128,
            strict_coverage: false,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables. Problems found while
    // loading come back as warnings; the logger is not up yet at this point.
    pub fn load() -> (Self, Vec<String>) {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] but reads values through `lookup`.
    pub fn load_from<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("MIN_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.min_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid MIN_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.max_password_length = length,
                Err(_) => warnings.push(format!("Ignoring invalid MAX_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("STRICT_COVERAGE") {
            match val.parse() {
                Ok(strict) => config.strict_coverage = strict,
                Err(_) => warnings.push(format!("Ignoring invalid STRICT_COVERAGE '{}'", val)),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Ignoring invalid WEB_PORT '{}'", val)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        config.fix_length_bounds(&mut warnings);

        (config, warnings)
    }

    // An empty or inverted range would reject every length
    fn fix_length_bounds(&mut self, warnings: &mut Vec<String>) {
        if self.min_password_length > self.max_password_length {
            let defaults = Config::default();
            warnings.push(format!(
                "MIN_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, using {}..={}",
                self.min_password_length,
                self.max_password_length,
                defaults.min_password_length,
                defaults.max_password_length
            ));
            self.min_password_length = defaults.min_password_length;
            self.max_password_length = defaults.max_password_length;
        }

        let clamped = self
            .default_password_length
            .clamp(self.min_password_length, self.max_password_length);
        if clamped != self.default_password_length {
            warnings.push(format!(
                "DEFAULT_PASSWORD_LENGTH {} is outside {}..={}, using {}",
                self.default_password_length, self.min_password_length, self.max_password_length, clamped
            ));
            self.default_password_length = clamped;
        }
    }

    /// Caller-side bounds. The generator itself accepts any positive length.
    pub fn check_length(&self, length: usize) -> Result<(), ConfigError> {
        if length < self.min_password_length || length > self.max_password_length {
            return Err(ConfigError::LengthOutOfRange {
                length,
                min: self.min_password_length,
                max: self.max_password_length,
            });
        }
        Ok(())
    }

    pub fn coverage(&self) -> Coverage {
        if self.strict_coverage {
            Coverage::Strict
        } else {
            Coverage::BestEffort
        }
    }

    /// Policy with every class enabled and the configured defaults.
    pub fn default_policy(&self) -> PolicyConfig {
        PolicyConfig {
            length: self.default_password_length,
            coverage: self.coverage(),
            ..PolicyConfig::default()
        }
    }
}
