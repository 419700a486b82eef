// src/cli/handlers.rs
use anyhow::{bail, Result};
use serde::Serialize;

use rust_passgen::config::Config;
use rust_passgen::generators::{classify, PasswordGenerator};
use rust_passgen::models::{GeneratedPassword, PolicyConfig, StrengthLabel};
use rust_passgen::utils::{framed, styled_strength};

use super::commands::GenerateArgs;

#[derive(Serialize)]
struct GenerationReport<'a> {
    passwords: &'a [GeneratedPassword],
    length: usize,
    classes: usize,
    strength: StrengthLabel,
}

#[derive(Serialize)]
struct StrengthReport {
    length: usize,
    classes: usize,
    strength: StrengthLabel,
}

pub fn handle_generate(args: &GenerateArgs, config: &Config, json: bool) -> Result<()> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let policy = args.to_policy(config);
    config.check_length(policy.length)?;

    let generator = PasswordGenerator::new();
    let passwords = (0..args.count)
        .map(|_| generator.generate_password(&policy))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Generated {} password(s)", passwords.len());
    print_generated(&passwords, &policy, json)
}

pub fn handle_classify(length: usize, classes: usize, json: bool) -> Result<()> {
    let strength = classify(length, classes);

    if json {
        let report = StrengthReport { length, classes, strength };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Strength: {}", styled_strength(strength));
    }
    Ok(())
}

/// Print passwords and the policy's strength, as text or JSON.
pub fn print_generated(passwords: &[GeneratedPassword], policy: &PolicyConfig, json: bool) -> Result<()> {
    let strength = classify(policy.length, policy.enabled_class_count());

    if json {
        let report = GenerationReport {
            passwords,
            length: policy.length,
            classes: policy.enabled_class_count(),
            strength,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match passwords {
        [single] => println!("\n{}", framed(single.as_str())),
        many => {
            for password in many {
                println!("{}", password);
            }
        }
    }
    println!("Strength: {}", styled_strength(strength));

    Ok(())
}
