//! The [`Generate`] capability and the units that compose other units.
//!
//! Every transform unit receives the seed produced by the previous stage and
//! returns the string handed to the next one. Randomness is always supplied
//! by the caller, so a unit is plain immutable configuration and a composed
//! [`Pipeline`] can be shared between threads as long as each thread brings
//! its own RNG.

use std::fmt;

use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::error::Result;

/// A password generating unit.
pub trait Generate: fmt::Display + Send + Sync {
    /// Derives a new string from `seed`.
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String>;

    /// Generates starting from the empty seed.
    fn generate_password(&self, rng: &mut dyn RngCore) -> Result<String> {
        self.generate(rng, "")
    }

    /// Generates `count` independent passwords from the empty seed.
    fn generate_multiple(&self, rng: &mut dyn RngCore, count: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate_password(rng)).collect()
    }

    /// Chains `next` after this unit.
    fn then<G>(self, next: G) -> Pipeline
    where
        Self: Sized + 'static,
        G: Generate + 'static,
    {
        Pipeline::new().with(self).with(next)
    }
}

impl<G: Generate + ?Sized> Generate for Box<G> {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        (**self).generate(rng, seed)
    }
}

/// An ordered chain of units; each unit's output is the next unit's seed.
#[derive(Default)]
pub struct Pipeline {
    units: Vec<Box<dyn Generate>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_units(units: Vec<Box<dyn Generate>>) -> Self {
        Self { units }
    }

    /// Appends a unit, taking ownership of it.
    pub fn with<G: Generate + 'static>(mut self, unit: G) -> Self {
        self.units.push(Box::new(unit));
        self
    }

    pub fn push(&mut self, unit: Box<dyn Generate>) {
        self.units.push(unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Generate for Pipeline {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        self.units
            .iter()
            .try_fold(seed.to_string(), |password, unit| {
                unit.generate(rng, &password)
            })
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_group(f, "Pipeline", &self.units)
    }
}

/// Delegates each call to exactly one of its units, chosen uniformly.
///
/// An empty switch passes the seed through unchanged.
#[derive(Default)]
pub struct Switch {
    units: Vec<Box<dyn Generate>>,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_units(units: Vec<Box<dyn Generate>>) -> Self {
        Self { units }
    }

    pub fn with<G: Generate + 'static>(mut self, unit: G) -> Self {
        self.units.push(Box::new(unit));
        self
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Generate for Switch {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        match self.units.choose(rng) {
            Some(unit) => {
                trace!(unit = %unit, "switch selected unit");
                unit.generate(rng, seed)
            }
            None => Ok(seed.to_string()),
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_group(f, "Switch", &self.units)
    }
}

fn write_group(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    units: &[Box<dyn Generate>],
) -> fmt::Result {
    write!(f, "<{name}>")?;
    for unit in units {
        for line in unit.to_string().lines() {
            write!(f, "\n\t{line}")?;
        }
    }
    Ok(())
}

/// Appends a fixed value to the seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    value: String,
}

impl Constant {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Generate for Constant {
    fn generate(&self, _rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        Ok(format!("{seed}{}", self.value))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Constant: {}>", self.value)
    }
}

/// Wraps the seed between a left and a right string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surround {
    left: String,
    right: String,
}

impl Surround {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Uses the same string on both sides.
    pub fn symmetric(side: impl Into<String>) -> Self {
        let side = side.into();
        Self {
            left: side.clone(),
            right: side,
        }
    }
}

impl Generate for Surround {
    fn generate(&self, _rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        Ok(format!("{}{seed}{}", self.left, self.right))
    }
}

impl fmt::Display for Surround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Surround: {} ... {}>", self.left, self.right)
    }
}

/// Picks one pair of braces per call to surround the seed with.
pub fn random_surround<L, R>(braces: impl IntoIterator<Item = (L, R)>) -> Switch
where
    L: Into<String>,
    R: Into<String>,
{
    braces
        .into_iter()
        .fold(Switch::new(), |switch, (left, right)| {
            switch.with(Surround::new(left, right))
        })
}
