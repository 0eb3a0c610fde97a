//! Case transforms applied to the whole seed.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::generate::Generate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// Title-cases each word and joins them without a separator. A letter
    /// following a digit or other non-letter also starts a word part.
    CamelCase,
    /// Lower-cases each word and joins them with underscores.
    SnakeCase,
    Upper,
    Lower,
    /// Upper-cases the first character and lower-cases the rest.
    Capitalize,
    /// Picks upper or lower case independently for every character.
    RandomCase,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::CamelCase,
        Case::SnakeCase,
        Case::Upper,
        Case::Lower,
        Case::Capitalize,
        Case::RandomCase,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Case::CamelCase => "camel_case",
            Case::SnakeCase => "snake_case",
            Case::Upper => "upper",
            Case::Lower => "lower",
            Case::Capitalize => "capitalize",
            Case::RandomCase => "random_case",
        }
    }

    pub fn apply(&self, rng: &mut dyn RngCore, seed: &str) -> String {
        match self {
            Case::CamelCase => seed.split_whitespace().map(title).collect(),
            Case::SnakeCase => seed
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join("_"),
            Case::Upper => seed.to_uppercase(),
            Case::Lower => seed.to_lowercase(),
            Case::Capitalize => capitalize(seed),
            Case::RandomCase => seed
                .chars()
                .map(|c| {
                    if rng.gen_bool(0.5) {
                        c.to_uppercase().collect::<String>()
                    } else {
                        c.to_lowercase().collect::<String>()
                    }
                })
                .collect(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Upper-cases every letter that does not follow another letter and
/// lower-cases the rest.
fn title(word: &str) -> String {
    let mut titled = String::with_capacity(word.len());
    let mut after_letter = false;
    for c in word.chars() {
        if after_letter {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    titled
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        Case::ALL
            .into_iter()
            .find(|case| case.key() == key)
            .ok_or_else(|| Error::UnknownCase(key.to_string()))
    }
}

impl Generate for Case {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        Ok(self.apply(rng, seed))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Case: {}>", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn apply(case: Case, seed: &str) -> String {
        let mut rng = StdRng::seed_from_u64(42);
        case.apply(&mut rng, seed)
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(apply(Case::SnakeCase, "Hello World"), "hello_world");
        assert_eq!(apply(Case::SnakeCase, "  Hello   World  "), "hello_world");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(apply(Case::CamelCase, "hello world"), "HelloWorld");
        assert_eq!(apply(Case::CamelCase, " hELLO wORLD "), "HelloWorld");
        assert_eq!(apply(Case::CamelCase, ""), "");
    }

    #[test]
    fn test_camel_case_after_digits() {
        assert_eq!(apply(Case::CamelCase, "42abc def"), "42AbcDef");
        assert_eq!(apply(Case::CamelCase, "route66north is"), "Route66NorthIs");
        assert_eq!(apply(Case::Capitalize, "42abc"), "42abc");
    }

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(apply(Case::Upper, "Mixed Case 42"), "MIXED CASE 42");
        assert_eq!(apply(Case::Lower, "Mixed Case 42"), "mixed case 42");
    }

    #[test]
    fn test_upper_is_idempotent() {
        let seed = "the Quick brown fox";
        let once = apply(Case::Upper, seed);
        assert_eq!(apply(Case::Upper, &once), once);
        assert_eq!(apply(Case::Upper, &apply(Case::Lower, seed)), once);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(apply(Case::Capitalize, "hELLO World"), "Hello world");
        assert_eq!(apply(Case::Capitalize, ""), "");
    }

    #[test]
    fn test_random_case_preserves_letters() {
        let seed = "abcdefghijklmnopqrstuvwxyz";
        let out = apply(Case::RandomCase, seed);
        assert_eq!(out.to_lowercase(), seed);
        assert!(out.chars().any(|c| c.is_uppercase()));
        assert!(out.chars().any(|c| c.is_lowercase()));
    }

    #[test]
    fn test_from_str() {
        for case in Case::ALL {
            assert_eq!(case.key().parse::<Case>().unwrap(), case);
        }
        assert!(matches!(
            "kebab_case".parse::<Case>(),
            Err(Error::UnknownCase(key)) if key == "kebab_case"
        ));
    }

    #[test]
    fn test_serde_keys_match_from_str() {
        let case: Case = serde_json::from_str("\"random_case\"").unwrap();
        assert_eq!(case, Case::RandomCase);
    }
}
