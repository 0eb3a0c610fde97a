//! Declarative pipeline definitions.
//!
//! A [`TransformConfig`] describes one unit as JSON, tagged by `type`:
//!
//! ```json
//! {
//!   "type": "pipeline",
//!   "units": [
//!     { "type": "words", "n": 3 },
//!     { "type": "case", "case": "camel_case" },
//!     { "type": "symbol_replacements", "n": 1 },
//!     { "type": "integers", "length": 2 }
//!   ]
//! }
//! ```
//!
//! [`TransformConfig::build`] validates everything eagerly, so a built unit
//! never fails because of its configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::case::Case;
use crate::count::{CountRange, DefectCount, non_negative};
use crate::defect::{
    AlphaDefects, AlphaOptions, DefectMapping, MappingTable, SymbolReplacements,
};
use crate::error::{Error, Result};
use crate::generate::{Constant, Generate, Pipeline, Surround, Switch, random_surround};
use crate::phrase::{CorpusPhrase, TextPhrase, Words};
use crate::random_string::{RandomString, Uuid4};
use crate::source::DirectoryCorpus;

fn default_true() -> bool {
    true
}

fn default_uuid_variant() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformConfig {
    Constant {
        value: String,
    },

    /// Surrounds the seed; `right` defaults to `left`.
    Surround {
        left: String,
        #[serde(default)]
        right: Option<String>,
    },

    RandomSurround {
        braces: Vec<(String, String)>,
    },

    RandomString {
        length: i64,
        chars: String,
    },

    Integers {
        length: i64,
    },

    Hexadecimal {
        length: i64,
        #[serde(default)]
        upper: bool,
    },

    Letters {
        length: i64,
        #[serde(default = "default_true")]
        upper: bool,
        #[serde(default = "default_true")]
        lower: bool,
    },

    AlphaNumeric {
        length: i64,
        #[serde(default = "default_true")]
        numbers: bool,
        #[serde(default = "default_true")]
        upper: bool,
        #[serde(default = "default_true")]
        lower: bool,
    },

    Uuid4 {
        #[serde(default = "default_uuid_variant")]
        variant: usize,
    },

    /// Case selected by key (`camel_case`, `snake_case`, ...).
    Case {
        case: String,
    },

    /// Ordered `[source, targets]` pairs.
    DefectMapping {
        mappings: Vec<(String, String)>,
        #[serde(default)]
        n: Option<i64>,
        #[serde(default)]
        n_min: Option<i64>,
        #[serde(default)]
        n_max: Option<i64>,
        #[serde(default)]
        force_change: bool,
    },

    AlphaDefects {
        #[serde(default)]
        options: AlphaOptions,
        #[serde(default)]
        n: Option<i64>,
        #[serde(default)]
        n_min: Option<i64>,
        #[serde(default)]
        n_max: Option<i64>,
        #[serde(default)]
        force_change: bool,
    },

    SymbolReplacements {
        #[serde(default)]
        n: Option<i64>,
        #[serde(default)]
        n_min: Option<i64>,
        #[serde(default)]
        n_max: Option<i64>,
        #[serde(default)]
        force_change: bool,
    },

    TextPhrase {
        text: String,
        #[serde(default)]
        n: Option<i64>,
        #[serde(default)]
        n_min: Option<i64>,
        #[serde(default)]
        n_max: Option<i64>,
        #[serde(default)]
        retries: Option<i64>,
    },

    /// Phrases from a directory of `*.txt` documents.
    CorpusPhrase {
        path: PathBuf,
        #[serde(default)]
        n: Option<i64>,
        #[serde(default)]
        n_min: Option<i64>,
        #[serde(default)]
        n_max: Option<i64>,
        #[serde(default)]
        retries: Option<i64>,
    },

    /// Words from `vocabulary`, a word file at `path`, or the built-in list.
    Words {
        #[serde(default)]
        vocabulary: Option<Vec<String>>,
        #[serde(default)]
        path: Option<PathBuf>,
        #[serde(default)]
        n: Option<i64>,
        #[serde(default)]
        n_min: Option<i64>,
        #[serde(default)]
        n_max: Option<i64>,
    },

    Pipeline {
        units: Vec<TransformConfig>,
    },

    Switch {
        units: Vec<TransformConfig>,
    },
}

impl TransformConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Builds the unit, validating the whole tree.
    pub fn build(&self) -> Result<Box<dyn Generate>> {
        let unit: Box<dyn Generate> = match self {
            TransformConfig::Constant { value } => Box::new(Constant::new(value.clone())),
            TransformConfig::Surround { left, right } => {
                let right = right.as_ref().unwrap_or(left);
                Box::new(Surround::new(left.clone(), right.clone()))
            }
            TransformConfig::RandomSurround { braces } => {
                Box::new(random_surround(braces.iter().cloned()))
            }
            TransformConfig::RandomString { length, chars } => {
                Box::new(RandomString::new(length_of(*length)?, chars)?)
            }
            TransformConfig::Integers { length } => {
                Box::new(RandomString::integers(length_of(*length)?))
            }
            TransformConfig::Hexadecimal { length, upper } => {
                Box::new(RandomString::hexadecimal(length_of(*length)?, *upper))
            }
            TransformConfig::Letters {
                length,
                upper,
                lower,
            } => Box::new(RandomString::letters(length_of(*length)?, *upper, *lower)?),
            TransformConfig::AlphaNumeric {
                length,
                numbers,
                upper,
                lower,
            } => {
                let length = length_of(*length)?;
                Box::new(RandomString::alpha_numeric(length, *numbers, *upper, *lower)?)
            }
            TransformConfig::Uuid4 { variant } => Box::new(Uuid4::new(*variant)?),
            TransformConfig::Case { case } => Box::new(case.parse::<Case>()?),
            TransformConfig::DefectMapping {
                mappings,
                n,
                n_min,
                n_max,
                force_change,
            } => {
                let table: MappingTable = mappings
                    .iter()
                    .map(|(source, targets)| (source.clone(), targets.as_str()))
                    .collect();
                let count = DefectCount::from_signed(*n, *n_min, *n_max)?;
                Box::new(DefectMapping::new(table, count, *force_change)?)
            }
            TransformConfig::AlphaDefects {
                options,
                n,
                n_min,
                n_max,
                force_change,
            } => {
                let count = DefectCount::from_signed(*n, *n_min, *n_max)?;
                Box::new(AlphaDefects::new(*options, count, *force_change)?)
            }
            TransformConfig::SymbolReplacements {
                n,
                n_min,
                n_max,
                force_change,
            } => {
                let count = DefectCount::from_signed(*n, *n_min, *n_max)?;
                Box::new(SymbolReplacements::new(count, *force_change)?)
            }
            TransformConfig::TextPhrase {
                text,
                n,
                n_min,
                n_max,
                retries,
            } => {
                let count = CountRange::from_signed(*n, *n_min, *n_max)?;
                let mut phrase = TextPhrase::new(text, count)?;
                if let Some(retries) = non_negative("retries", *retries)? {
                    phrase = phrase.retries(retries);
                }
                Box::new(phrase)
            }
            TransformConfig::CorpusPhrase {
                path,
                n,
                n_min,
                n_max,
                retries,
            } => {
                let count = CountRange::from_signed(*n, *n_min, *n_max)?;
                let mut phrase = CorpusPhrase::new(DirectoryCorpus::open(path)?, count);
                if let Some(retries) = non_negative("retries", *retries)? {
                    phrase = phrase.retries(retries);
                }
                Box::new(phrase)
            }
            TransformConfig::Words {
                vocabulary,
                path,
                n,
                n_min,
                n_max,
            } => {
                let count = CountRange::from_signed(*n, *n_min, *n_max)?;
                Box::new(match (vocabulary, path) {
                    (Some(vocabulary), _) => Words::new(vocabulary.clone(), count)?,
                    (None, Some(path)) => Words::from_file(path, count)?,
                    (None, None) => Words::basic(count),
                })
            }
            TransformConfig::Pipeline { units } => {
                Box::new(Pipeline::from_units(build_all(units)?))
            }
            TransformConfig::Switch { units } => Box::new(Switch::from_units(build_all(units)?)),
        };
        Ok(unit)
    }
}

fn length_of(length: i64) -> Result<usize> {
    usize::try_from(length).map_err(|_| Error::InvalidCount {
        field: "length",
        value: length,
    })
}

fn build_all(units: &[TransformConfig]) -> Result<Vec<Box<dyn Generate>>> {
    units.iter().map(TransformConfig::build).collect()
}
