// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, InquireError, Text};

use rust_passgen::config::Config;
use rust_passgen::generators::PasswordGenerator;
use rust_passgen::models::PolicyConfig;

use super::handlers::print_generated;

pub fn run_interactive(config: &Config, json: bool) -> Result<()> {
    println!("=== Secure Password Generator ===\n");

    let length = prompt_length(config)?;

    println!("\nInclude the following character types?");

    let include_uppercase = Confirm::new("Uppercase letters (A-Z)?")
        .with_default(true)
        .prompt()?;

    let include_lowercase = Confirm::new("Lowercase letters (a-z)?")
        .with_default(true)
        .prompt()?;

    let include_digits = Confirm::new("Digits (0-9)?")
        .with_default(true)
        .prompt()?;

    let include_symbols = Confirm::new("Symbols (!@#$%^&* etc.)?")
        .with_default(true)
        .prompt()?;

    let mut options = PolicyConfig {
        length,
        include_uppercase,
        include_lowercase,
        include_digits,
        include_symbols,
        coverage: config.coverage(),
    };

    if options.enabled_class_count() == 0 {
        println!("No character types selected, defaulting to all types.");
        options = PolicyConfig {
            length,
            coverage: config.coverage(),
            ..PolicyConfig::default()
        };
    }

    let password = PasswordGenerator::new().generate_password(&options)?;
    print_generated(&[password], &options, json)
}

// Keep asking until the answer parses and sits inside the configured bounds
fn prompt_length(config: &Config) -> Result<usize, InquireError> {
    let message = format!(
        "Enter desired password length ({}-{}):",
        config.min_password_length, config.max_password_length
    );
    let default = config.default_password_length.to_string();

    loop {
        let answer = Text::new(&message).with_default(&default).prompt()?;

        match answer.trim().parse::<usize>() {
            Ok(length) => match config.check_length(length) {
                Ok(()) => return Ok(length),
                Err(e) => println!("{}", e),
            },
            Err(_) => println!("Please enter a valid number."),
        }
    }
}
