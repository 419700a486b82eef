// src/cli/commands.rs
use clap::{Args, Subcommand};

use rust_passgen::config::Config;
use rust_passgen::models::{Coverage, PolicyConfig};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Classify the strength of a policy
    Classify {
        /// Password length
        #[arg(long, short)]
        length: usize,

        /// Number of enabled character classes (0-4)
        #[arg(long, short)]
        classes: usize,
    },

    /// Ask for the policy interactively
    Interactive,

    /// Start the HTTP API server
    Serve {
        /// API server port
        #[arg(long, env = "WEB_PORT")]
        port: Option<u16>,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH or 16)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Fail when the length cannot hold one character of every class
    #[arg(long)]
    pub strict: bool,

    /// Number of passwords to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

impl GenerateArgs {
    pub fn to_policy(&self, config: &Config) -> PolicyConfig {
        let coverage = if self.strict {
            Coverage::Strict
        } else {
            config.coverage()
        };

        PolicyConfig {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: !self.no_upper,
            include_lowercase: !self.no_lower,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
            coverage,
        }
    }
}
