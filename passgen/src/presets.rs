//! Ready-made pipelines.

use crate::case::Case;
use crate::count::{CountRange, DefectCount};
use crate::defect::{AlphaDefects, AlphaOptions, SymbolReplacements};
use crate::error::Result;
use crate::generate::{Pipeline, Switch};
use crate::phrase::{CorpusPhrase, Words};
use crate::random_string::{RandomString, Uuid4};
use crate::source::Corpus;

/// Knobs for [`defect_phrase_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefectPhraseOptions {
    pub phrase_min: usize,
    pub phrase_max: usize,
    pub case: Case,
    /// Defects applied to the cased phrase.
    pub n_defect: usize,
    /// Length of the trailing digit run.
    pub n_integers: usize,
    pub force_change: bool,
}

impl Default for DefectPhraseOptions {
    fn default() -> Self {
        Self {
            phrase_min: 3,
            phrase_max: 4,
            case: Case::CamelCase,
            n_defect: 1,
            n_integers: 2,
            force_change: true,
        }
    }
}

/// A corpus phrase, cased, with a symbol or letter defect and a numeric tail,
/// e.g. `TheFilmW4sGreat42`.
pub fn defect_phrase_password(
    corpus: impl Corpus + 'static,
    options: &DefectPhraseOptions,
) -> Result<Pipeline> {
    let words = CountRange::between(options.phrase_min, options.phrase_max);
    let defects = DefectCount::exactly(options.n_defect);
    let letters = AlphaDefects::new(AlphaOptions::default(), defects, options.force_change)?;
    let symbols = SymbolReplacements::new(defects, false)?;

    Ok(Pipeline::new()
        .with(CorpusPhrase::new(corpus, Some(words)))
        .with(options.case)
        .with(Switch::new().with(symbols).with(letters))
        .with(RandomString::integers(options.n_integers)))
}

/// Four random words, <https://xkcd.com/936/> style.
pub fn xkcd_password() -> Words {
    Words::basic(Some(CountRange::exactly(4)))
}

pub fn uuid4() -> Uuid4 {
    Uuid4::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generate::Generate;
    use crate::source::MemoryCorpus;

    fn corpus() -> MemoryCorpus {
        MemoryCorpus::new("reviews")
            .with_document("one", "The film was great. I loved every single minute of it.")
            .with_document("two", "Terrible pacing ruined the whole story!")
    }

    #[test]
    fn test_defect_phrase_password_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pipeline = defect_phrase_password(corpus(), &DefectPhraseOptions::default()).unwrap();
        assert_eq!(pipeline.len(), 4);

        for _ in 0..20 {
            let password = pipeline.generate_password(&mut rng).unwrap();
            let body: String = password.chars().take(password.chars().count() - 2).collect();
            assert!(password.chars().rev().take(2).all(|c| c.is_ascii_digit()), "{password}");
            assert!(!body.contains(' '));
            assert!(body.chars().next().is_some_and(|c| !c.is_lowercase()), "{password}");
        }
    }

    #[test]
    fn test_defect_phrase_is_deterministic_per_seed() {
        let pipeline = defect_phrase_password(corpus(), &DefectPhraseOptions::default()).unwrap();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(
            pipeline.generate_multiple(&mut rng1, 5).unwrap(),
            pipeline.generate_multiple(&mut rng2, 5).unwrap()
        );
    }

    #[test]
    fn test_xkcd_password() {
        let mut rng = StdRng::seed_from_u64(42);
        let password = xkcd_password().generate_password(&mut rng).unwrap();
        assert_eq!(password.split(' ').count(), 4);
    }

    #[test]
    fn test_uuid4_preset() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(uuid4().generate_password(&mut rng).unwrap().len(), 36);
    }
}
