// src/generators/password.rs
use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;

use super::charset::Charset;
use super::strength::classify;
use crate::models::{CharClass, Coverage, GeneratedPassword, PolicyConfig, StrengthLabel};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Password length must be at least 1")]
    InvalidLength,

    #[error("At least one character type must be selected")]
    EmptyCharset,

    #[error("Cannot fit {classes} character types into a {length}-character password")]
    ConstraintUnsatisfiable { length: usize, classes: usize },
}

/// Generate a password for `config`, drawing all randomness from `rng`.
///
/// Validation happens before the first draw, so a rejected config consumes
/// no entropy. The returned password has exactly `config.length` characters,
/// all taken from the enabled classes, and contains every enabled class
/// whenever `config.length` is at least the number of enabled classes.
pub fn generate<R>(config: &PolicyConfig, rng: &mut R) -> Result<GeneratedPassword, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if config.length < 1 {
        return Err(GenerationError::InvalidLength);
    }

    let classes = config.enabled_classes();
    let charset = Charset::new(&classes);
    if charset.is_empty() {
        return Err(GenerationError::EmptyCharset);
    }

    if config.coverage == Coverage::Strict && config.length < classes.len() {
        return Err(GenerationError::ConstraintUnsatisfiable {
            length: config.length,
            classes: classes.len(),
        });
    }

    debug!(
        "Generating {}-character password from {} classes ({} candidate characters)",
        config.length,
        classes.len(),
        charset.len()
    );

    // Uniform rejects and redraws internally, so the index is unbiased
    let dist = Uniform::from(0..charset.len());
    let mut password: Vec<char> = (0..config.length)
        .map(|_| charset[dist.sample(rng)])
        .collect();

    repair(&mut password, &classes, rng);

    Ok(GeneratedPassword::new(password.into_iter().collect()))
}

// Make sure each enabled class shows up at least once. Classes are handled
// one at a time in the fixed order. While every class can fit, a position
// holding the last character of another class is never overwritten;
// otherwise the last repair wins.
fn repair<R>(password: &mut [char], classes: &[CharClass], rng: &mut R)
where
    R: RngCore + CryptoRng + ?Sized,
{
    let guarded = password.len() >= classes.len();

    for &class in classes {
        if password.iter().any(|&c| class.contains(c)) {
            continue;
        }

        let position = loop {
            let candidate = rng.gen_range(0..password.len());
            if !guarded || !is_last_of_its_class(password, candidate, classes) {
                break candidate;
            }
        };

        if let Some(&replacement) = class.alphabet().as_bytes().choose(rng) {
            password[position] = replacement as char;
        }

        debug!("Repaired missing {} class", class);
    }
}

fn is_last_of_its_class(password: &[char], position: usize, classes: &[CharClass]) -> bool {
    let current = password[position];

    classes
        .iter()
        .filter(|class| class.contains(current))
        .any(|class| {
            password
                .iter()
                .enumerate()
                .all(|(i, &c)| i == position || !class.contains(c))
        })
}

/// Generator backed by the operating system's CSPRNG.
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PolicyConfig) -> Result<GeneratedPassword, GenerationError> {
        generate(options, &mut OsRng)
    }

    pub fn classify(&self, options: &PolicyConfig) -> StrengthLabel {
        classify(options.length, options.enabled_class_count())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn all_classes(length: usize) -> PolicyConfig {
        PolicyConfig {
            length,
            ..PolicyConfig::default()
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(generate(&all_classes(0), &mut rng), Err(GenerationError::InvalidLength));
    }

    #[test]
    fn no_classes_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let config = PolicyConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: false,
            ..PolicyConfig::default()
        };
        assert_eq!(generate(&config, &mut rng), Err(GenerationError::EmptyCharset));
    }

    #[test]
    fn rejected_config_draws_no_randomness() {
        let mut used = ChaCha20Rng::seed_from_u64(9);
        let mut fresh = ChaCha20Rng::seed_from_u64(9);
        let _ = generate(&all_classes(0), &mut used);
        assert_eq!(used.next_u64(), fresh.next_u64());
    }

    #[test]
    fn same_seed_gives_same_password() {
        let mut a = ChaCha20Rng::seed_from_u64(1234);
        let mut b = ChaCha20Rng::seed_from_u64(1234);
        assert_eq!(
            generate(&all_classes(20), &mut a).unwrap(),
            generate(&all_classes(20), &mut b).unwrap()
        );
    }

    #[test]
    fn single_class_draws_are_spread_evenly() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let config = PolicyConfig {
            length: 5_000,
            include_uppercase: false,
            include_lowercase: false,
            include_symbols: false,
            ..PolicyConfig::default()
        };
        let password = generate(&config, &mut rng).unwrap();

        let mut seen = [0usize; 10];
        for c in password.as_str().chars() {
            let digit = c.to_digit(10).expect("non-digit in digits-only password");
            seen[digit as usize] += 1;
        }
        // 500 expected per digit
        assert!(seen.iter().all(|&n| n > 350 && n < 650), "{:?}", seen);
    }

    #[test]
    fn every_charset_position_is_reachable() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let password = generate(&all_classes(10_000), &mut rng).unwrap();
        let charset = Charset::new(&CharClass::ALL);

        for i in 0..charset.len() {
            assert!(
                password.as_str().contains(charset[i]),
                "{:?} never drawn",
                charset[i]
            );
        }
    }

    #[test]
    fn repair_draws_from_the_missing_class() {
        for seed in 0..100 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let mut password: Vec<char> = "abcdef".chars().collect();
            repair(&mut password, &[CharClass::Lower, CharClass::Symbols], &mut rng);

            let symbols: Vec<char> = password
                .iter()
                .copied()
                .filter(|&c| !c.is_ascii_lowercase())
                .collect();
            assert_eq!(symbols.len(), 1);
            assert!(CharClass::Symbols.contains(symbols[0]));
        }
    }

    #[test]
    fn repair_inserts_missing_class() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut password: Vec<char> = "abcdefgh".chars().collect();
        repair(&mut password, &[CharClass::Lower, CharClass::Digits], &mut rng);

        assert_eq!(password.len(), 8);
        assert_eq!(password.iter().filter(|c| c.is_ascii_digit()).count(), 1);
        assert_eq!(password.iter().filter(|c| c.is_ascii_lowercase()).count(), 7);
    }

    #[test]
    fn repair_never_removes_last_member_of_a_class() {
        // 'a' is the only lowercase character; digits and symbols are missing.
        for seed in 0..200 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let mut password: Vec<char> = "aBCD".chars().collect();
            repair(&mut password, &CharClass::ALL, &mut rng);

            for class in CharClass::ALL {
                assert!(
                    password.iter().any(|&c| class.contains(c)),
                    "seed {} lost {} in {:?}",
                    seed,
                    class,
                    password
                );
            }
        }
    }

    #[test]
    fn repair_leaves_complete_password_untouched() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut password: Vec<char> = "aB3$".chars().collect();
        repair(&mut password, &CharClass::ALL, &mut rng);
        assert_eq!(password.iter().collect::<String>(), "aB3$");
    }

    #[test]
    fn last_of_class_detection() {
        let password: Vec<char> = "aaB1".chars().collect();
        let classes = [CharClass::Lower, CharClass::Upper, CharClass::Digits];
        assert!(!is_last_of_its_class(&password, 0, &classes));
        assert!(is_last_of_its_class(&password, 2, &classes));
        assert!(is_last_of_its_class(&password, 3, &classes));
    }

    #[test]
    fn strict_coverage_rejects_short_passwords() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let config = PolicyConfig {
            length: 3,
            coverage: Coverage::Strict,
            ..PolicyConfig::default()
        };
        assert_eq!(
            generate(&config, &mut rng),
            Err(GenerationError::ConstraintUnsatisfiable { length: 3, classes: 4 })
        );
    }

    #[test]
    fn strict_coverage_allows_exact_fit() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let config = PolicyConfig {
            length: 4,
            coverage: Coverage::Strict,
            ..PolicyConfig::default()
        };
        let password = generate(&config, &mut rng).unwrap();
        for class in CharClass::ALL {
            assert!(password.as_str().chars().any(|c| class.contains(c)));
        }
    }

    #[test]
    fn os_backed_generator_produces_requested_length() {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&all_classes(32)).unwrap();
        assert_eq!(password.len(), 32);
        assert_eq!(generator.classify(&all_classes(32)), StrengthLabel::VeryStrong);
    }
}
