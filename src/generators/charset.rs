// src/generators/charset.rs
use std::ops::Index;

use crate::models::CharClass;

/// Characters eligible for sampling, laid out class by class in the order
/// the classes are given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn new(classes: &[CharClass]) -> Self {
        let mut chars: Vec<char> = Vec::new();

        for class in classes {
            for c in class.alphabet().chars() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
        }

        Charset { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Index<usize> for Charset {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.chars[index]
    }
}
