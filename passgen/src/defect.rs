//! Defect injection: substitutes characters of the seed according to a
//! table of character mappings.
//!
//! Each table entry maps a set of source characters onto a set of target
//! characters. A position in the seed is *matchable* when its character
//! belongs to some source set; the target is drawn from the first entry
//! whose source set contains it. The number of defects is drawn from the
//! configured [`DefectCount`] once it has been resolved against the number
//! of matchable positions; an unset bound stands for all of them.

use std::collections::BTreeSet;
use std::fmt;

use rand::RngCore;
use rand::seq::{SliceRandom, index};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::count::DefectCount;
use crate::error::{Error, Result};
use crate::generate::Generate;

const VOWELS: &str = "aeiou";
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Letters replaced by symbols that look like them.
pub const SYMBOL_TABLE: &[(&str, &str)] = &[
    ("A", "4"),
    ("OoQ", "0"),
    ("E", "3"),
    ("LlIJ", "1"),
    ("ij", "!:;"),
    ("Ss", "$5"),
    ("Zz", "2"),
    ("LVv", "7^"),
    ("a", "@"),
    ("N", r"\%"),
    ("B", r"8\%&"),
    ("Ppq", "9"),
    ("bd", "6&"),
    ("XxfF", "+"),
    ("H", "#"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Mapping {
    source: String,
    targets: Vec<char>,
}

/// Ordered `source set -> target set` substitution rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<Mapping>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl Into<String>, targets: &str) -> Self {
        self.entries.push(Mapping {
            source: source.into(),
            targets: targets.chars().collect(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matches(&self, c: char) -> bool {
        self.find(c).is_some()
    }

    fn find(&self, c: char) -> Option<&Mapping> {
        self.entries
            .iter()
            .find(|mapping| mapping.source.contains(c))
    }

    /// Checks every entry, so the outcome does not depend on entry order.
    ///
    /// With `force_change`, an entry whose targets collapse to a single
    /// character that is also one of its sources is rejected: that
    /// character could never be changed.
    pub fn validate(&self, force_change: bool) -> Result<()> {
        for mapping in &self.entries {
            let invalid = |reason| Error::InvalidMapping {
                source_chars: mapping.source.clone(),
                targets: mapping.targets.iter().collect(),
                reason,
            };

            if mapping.source.is_empty() {
                return Err(invalid("mapping must have at least one source character"));
            }

            let unique: BTreeSet<char> = mapping.targets.iter().copied().collect();
            match unique.first() {
                None => return Err(invalid("mapping must map to at least one character")),
                Some(&only)
                    if unique.len() == 1 && force_change && mapping.source.contains(only) =>
                {
                    return Err(invalid(
                        "deterministic mappings onto a source character are not allowed \
                         when forcing a change",
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl<S: Into<String>, T: AsRef<str>> FromIterator<(S, T)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MappingTable::new(), |table, (source, targets)| {
                table.with(source, targets.as_ref())
            })
    }
}

impl fmt::Display for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, mapping) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let targets: String = mapping.targets.iter().collect();
            write!(f, "{:?}: {:?}", mapping.source, targets)?;
        }
        write!(f, "}}")
    }
}

/// The defect engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectMapping {
    table: MappingTable,
    count: DefectCount,
    force_change: bool,
}

impl DefectMapping {
    pub fn new(table: MappingTable, count: DefectCount, force_change: bool) -> Result<Self> {
        table.validate(force_change)?;
        Ok(Self {
            table,
            count,
            force_change,
        })
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn count(&self) -> DefectCount {
        self.count
    }

    pub fn force_change(&self) -> bool {
        self.force_change
    }

    /// Mutates `chars` in place and returns the positions that were drawn.
    fn mutate(&self, rng: &mut dyn RngCore, chars: &mut [char]) -> Vec<usize> {
        let candidates: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| self.table.matches(**c))
            .map(|(i, _)| i)
            .collect();
        let n_possible = candidates.len();

        let range = self.count.resolve(n_possible);
        let n = range.sample(rng);
        debug!(n_possible, %range, n, "applying defects");

        // n distinct matchable positions, uniformly.
        let positions: Vec<usize> = index::sample(rng, n_possible, n)
            .into_iter()
            .map(|i| candidates[i])
            .collect();

        for &position in &positions {
            let original = chars[position];
            chars[position] = self.replacement(rng, original).unwrap_or(original);
        }
        positions
    }

    fn replacement(&self, rng: &mut dyn RngCore, original: char) -> Option<char> {
        let mapping = self.table.find(original)?;
        if self.force_change {
            // Equivalent to redrawing until the replacement differs.
            let options: Vec<char> = mapping
                .targets
                .iter()
                .copied()
                .filter(|&c| c != original)
                .collect();
            options.choose(rng).copied()
        } else {
            mapping.targets.choose(rng).copied()
        }
    }
}

impl Generate for DefectMapping {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        if seed.is_empty() {
            return Ok(String::new());
        }
        let mut chars: Vec<char> = seed.chars().collect();
        self.mutate(rng, &mut chars);
        Ok(chars.into_iter().collect())
    }
}

impl fmt::Display for DefectMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<DefectMapping: {}, {}>", self.count, self.table)
    }
}

/// Which letters [`AlphaDefects`] replaces and with what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaOptions {
    pub replace_vowels: bool,
    /// Replace vowels only with vowels (otherwise with any letter).
    pub respect_vowels: bool,
    pub replace_consonants: bool,
    /// Replace consonants only with consonants (otherwise with any letter).
    pub respect_consonants: bool,
    /// Upper-case letters map only to upper-case letters and vice versa.
    pub respect_case: bool,
}

impl Default for AlphaOptions {
    fn default() -> Self {
        Self {
            replace_vowels: true,
            respect_vowels: true,
            replace_consonants: false,
            respect_consonants: true,
            respect_case: true,
        }
    }
}

impl AlphaOptions {
    fn table(&self) -> MappingTable {
        let mut lower = Vec::new();
        if self.replace_vowels {
            let targets = if self.respect_vowels { VOWELS } else { LETTERS };
            lower.push((VOWELS, targets));
        }
        if self.replace_consonants {
            let targets = if self.respect_consonants {
                CONSONANTS
            } else {
                LETTERS
            };
            lower.push((CONSONANTS, targets));
        }

        let mut table = MappingTable::new();
        for (source, targets) in lower {
            let upper_source = source.to_ascii_uppercase();
            let upper_targets = targets.to_ascii_uppercase();
            if self.respect_case {
                table = table
                    .with(source, targets)
                    .with(upper_source, &upper_targets);
            } else {
                let either = format!("{targets}{upper_targets}");
                table = table.with(source, &either).with(upper_source, &either);
            }
        }
        table
    }
}

/// Letter-for-letter defects built from vowel and consonant sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaDefects {
    options: AlphaOptions,
    engine: DefectMapping,
}

impl AlphaDefects {
    pub fn new(options: AlphaOptions, count: DefectCount, force_change: bool) -> Result<Self> {
        let engine = DefectMapping::new(options.table(), count, force_change)?;
        Ok(Self { options, engine })
    }

    pub fn options(&self) -> &AlphaOptions {
        &self.options
    }
}

impl Generate for AlphaDefects {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        self.engine.generate(rng, seed)
    }
}

impl fmt::Display for AlphaDefects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<AlphaDefects: {}", self.engine.count)?;
        if self.options.replace_vowels {
            let target = if self.options.respect_vowels {
                "vowels"
            } else {
                "all"
            };
            write!(f, ", vowels={target}")?;
        }
        if self.options.replace_consonants {
            let target = if self.options.respect_consonants {
                "consonants"
            } else {
                "all"
            };
            write!(f, ", consonants={target}")?;
        }
        write!(f, ">")
    }
}

/// Replaces letters with look-alike symbols from [`SYMBOL_TABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolReplacements {
    engine: DefectMapping,
}

impl SymbolReplacements {
    pub fn new(count: DefectCount, force_change: bool) -> Result<Self> {
        let table = SYMBOL_TABLE.iter().copied().collect();
        Ok(Self {
            engine: DefectMapping::new(table, count, force_change)?,
        })
    }
}

impl Generate for SymbolReplacements {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        self.engine.generate(rng, seed)
    }
}

impl fmt::Display for SymbolReplacements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<SymbolReplacements: {}>", self.engine.count)
    }
}
