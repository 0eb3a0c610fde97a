//! Password generation by composing small string transforms into pipelines.
//!
//! Every unit implements [`Generate`]: it takes the seed produced by the
//! previous stage and returns a derived string. Units are combined with
//! [`Pipeline`] (run in order) and [`Switch`] (run one, chosen at random).
//!
//! ```text
//! CorpusPhrase ──▶ Case ──▶ Switch(SymbolReplacements | AlphaDefects) ──▶ Integers
//! "the film was"   "TheFilmWas"   "Th3FilmWas"                           "Th3FilmWas42"
//! ```
//!
//! # Units
//!
//! - [`RandomString`] and its specializations (digits, hex, letters,
//!   alphanumerics) plus the [`Uuid4`] layout
//! - [`Case`] transforms selected by key
//! - [`DefectMapping`], the defect engine, with the [`AlphaDefects`] and
//!   [`SymbolReplacements`] tables
//! - [`TextPhrase`], [`CorpusPhrase`] and [`Words`]
//! - [`Constant`], [`Surround`], [`Pipeline`] and [`Switch`]
//!
//! # Randomness
//!
//! Units never own a random source. Every call takes `&mut dyn RngCore`, so
//! a seeded `StdRng` makes generation reproducible and a composed pipeline
//! can be shared across threads with one RNG per thread.
//!
//! ```rust
//! use passgen::{Case, Constant, CountRange, Generate, Pipeline, RandomString, Words};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let pipeline = Pipeline::new()
//!     .with(Words::basic(Some(CountRange::exactly(3))))
//!     .with(Case::CamelCase)
//!     .with(Constant::new("-"))
//!     .with(RandomString::integers(4));
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let password = pipeline.generate_password(&mut rng).unwrap();
//! assert!(password.contains('-'));
//! ```
//!
//! This is a toy for producing memorable strings; it makes no claims about
//! entropy or resistance to guessing.

pub mod case;
pub mod config;
pub mod count;
pub mod defect;
pub mod error;
pub mod generate;
pub mod phrase;
pub mod presets;
pub mod random_string;
pub mod source;
pub mod vocabulary;

pub use case::Case;
pub use config::TransformConfig;
pub use count::{CountRange, DefectCount};
pub use defect::{
    AlphaDefects, AlphaOptions, DefectMapping, MappingTable, SYMBOL_TABLE, SymbolReplacements,
};
pub use error::{Error, Result};
pub use generate::{Constant, Generate, Pipeline, Surround, Switch, random_surround};
pub use phrase::{CorpusPhrase, TextPhrase, Words};
pub use presets::{DefectPhraseOptions, defect_phrase_password, uuid4, xkcd_password};
pub use random_string::{RandomString, Uuid4};
pub use source::{Corpus, DirectoryCorpus, MemoryCorpus, PunctuationSplitter, SentenceSplitter};
