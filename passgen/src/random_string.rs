//! Fixed-length strings drawn uniformly from an alphabet.

use std::fmt;

use rand::{Rng, RngCore};

use crate::error::{Error, Result};
use crate::generate::{Constant, Generate, Pipeline};

pub const DIGITS: &str = "0123456789";
pub const HEX_DIGITS: &str = "0123456789abcdef";
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Appends `length` characters to the seed, each drawn independently from
/// the alphabet (repeats allowed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomString {
    length: usize,
    alphabet: Vec<char>,
    kind: &'static str,
}

impl RandomString {
    pub fn new(length: usize, chars: &str) -> Result<Self> {
        Self::with_kind("RandomString", length, chars)
    }

    fn with_kind(kind: &'static str, length: usize, chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(Self {
            length,
            alphabet: chars.chars().collect(),
            kind,
        })
    }

    /// Decimal digits.
    pub fn integers(length: usize) -> Self {
        Self {
            length,
            alphabet: DIGITS.chars().collect(),
            kind: "Integers",
        }
    }

    pub fn hexadecimal(length: usize, upper: bool) -> Self {
        let chars = if upper {
            HEX_DIGITS.to_ascii_uppercase()
        } else {
            HEX_DIGITS.to_string()
        };
        Self {
            length,
            alphabet: chars.chars().collect(),
            kind: "Hexadecimal",
        }
    }

    /// ASCII letters; fails with [`Error::EmptyAlphabet`] when both cases are disabled.
    pub fn letters(length: usize, upper: bool, lower: bool) -> Result<Self> {
        let mut chars = String::new();
        if upper {
            chars.push_str(ASCII_UPPERCASE);
        }
        if lower {
            chars.push_str(ASCII_LOWERCASE);
        }
        Self::with_kind("Letters", length, &chars)
    }

    pub fn alpha_numeric(length: usize, numbers: bool, upper: bool, lower: bool) -> Result<Self> {
        let mut chars = String::new();
        if upper {
            chars.push_str(ASCII_UPPERCASE);
        }
        if lower {
            chars.push_str(ASCII_LOWERCASE);
        }
        if numbers {
            chars.push_str(DIGITS);
        }
        Self::with_kind("AlphaNumeric", length, &chars)
    }

    /// Combines two generators: the longer length and both alphabets.
    pub fn union(self, other: RandomString) -> Self {
        let mut alphabet = self.alphabet;
        alphabet.extend(other.alphabet);
        Self {
            length: self.length.max(other.length),
            alphabet,
            kind: "RandomString",
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Generate for RandomString {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        let mut password = String::with_capacity(seed.len() + self.length);
        password.push_str(seed);
        for _ in 0..self.length {
            password.push(self.alphabet[rng.gen_range(0..self.alphabet.len())]);
        }
        Ok(password)
    }
}

impl fmt::Display for RandomString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: n={}", self.kind, self.length)?;
        if self.kind == "RandomString" {
            write!(f, ", {}", self.alphabet.iter().collect::<String>())?;
        }
        write!(f, ">")
    }
}

/// Variant nibble alphabets, indexed by variant number.
const UUID_VARIANTS: [&str; 4] = ["01234567", "89ab", "cd", "ef"];

/// Random version 4 UUID strings: `xxxxxxxx-xxxx-4xxx-Nxxx-xxxxxxxxxxxx`.
///
/// `N` is drawn from the alphabet of the chosen variant; variant 1 (the
/// default) is the RFC 4122 layout with `N` in `{8, 9, a, b}`.
pub struct Uuid4 {
    variant: usize,
    pipeline: Pipeline,
}

impl Uuid4 {
    pub const VERSION: char = '4';

    pub fn new(variant: usize) -> Result<Self> {
        let nibbles = UUID_VARIANTS
            .get(variant)
            .ok_or(Error::UnsupportedVariant(variant))?;
        Ok(Self::build(variant, nibbles))
    }

    fn build(variant: usize, nibbles: &str) -> Self {
        let variant_nibble = RandomString {
            length: 1,
            alphabet: nibbles.chars().collect(),
            kind: "Variant",
        };
        let pipeline = Pipeline::new()
            .with(RandomString::hexadecimal(8, false))
            .with(Constant::new("-"))
            .with(RandomString::hexadecimal(4, false))
            .with(Constant::new(format!("-{}", Self::VERSION)))
            .with(RandomString::hexadecimal(3, false))
            .with(Constant::new("-"))
            .with(variant_nibble)
            .with(RandomString::hexadecimal(3, false))
            .with(Constant::new("-"))
            .with(RandomString::hexadecimal(12, false));

        Self { variant, pipeline }
    }

    pub fn variant(&self) -> usize {
        self.variant
    }
}

impl Default for Uuid4 {
    fn default() -> Self {
        Self::build(1, UUID_VARIANTS[1])
    }
}

impl Generate for Uuid4 {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        self.pipeline.generate(rng, seed)
    }
}

impl fmt::Display for Uuid4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Uuid4: variant={}>", self.variant)
    }
}
