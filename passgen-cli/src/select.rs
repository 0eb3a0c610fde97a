//! Turns command line choices into a generator.

use std::path::Path;

use clap::ValueEnum;
use passgen::{
    CountRange, DefectPhraseOptions, DirectoryCorpus, Generate, TransformConfig, Words,
    defect_phrase_password, uuid4, xkcd_password,
};
use tracing::debug;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Defect-laden phrases mined from a text corpus
    Phrases,
    /// Four random words
    Xkcd,
    /// A random UUID4 string
    Uuid,
}

/// Picks the generator described by the arguments.
///
/// A config file wins over everything else. Without one the preset decides,
/// defaulting to [`Preset::Xkcd`]. `words` replaces the built-in vocabulary
/// of the xkcd preset.
pub fn build_generator(
    preset: Option<Preset>,
    config: Option<&Path>,
    corpus: Option<&Path>,
    words: Option<&Path>,
) -> Result<Box<dyn Generate>, Error> {
    if let Some(path) = config {
        if preset.is_some() {
            return Err(Error::InvalidArgs);
        }
        debug!(path = %path.display(), "loading pipeline config");
        return Ok(TransformConfig::from_file(path)?.build()?);
    }

    let generator: Box<dyn Generate> = match preset.unwrap_or(Preset::Xkcd) {
        Preset::Phrases => {
            let corpus = DirectoryCorpus::open(corpus.ok_or(Error::MissingCorpus)?)?;
            Box::new(defect_phrase_password(corpus, &DefectPhraseOptions::default())?)
        }
        Preset::Xkcd => match words {
            Some(path) => {
                let words = Words::from_file(path, Some(CountRange::exactly(4)))?;
                Box::new(words)
            }
            None => Box::new(xkcd_password()),
        },
        Preset::Uuid => Box::new(uuid4()),
    };
    debug!(generator = %generator, "built generator");
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_xkcd() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = build_generator(None, None, None, None).unwrap();
        let password = generator.generate_password(&mut rng).unwrap();
        assert_eq!(password.split(' ').count(), 4);
    }

    #[test]
    fn test_uuid_preset() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = build_generator(Some(Preset::Uuid), None, None, None).unwrap();
        let password = generator.generate_password(&mut rng).unwrap();
        assert_eq!(password.len(), 36);
        assert_eq!(password.chars().nth(14), Some('4'));
    }

    #[test]
    fn test_phrases_requires_corpus() {
        let result = build_generator(Some(Preset::Phrases), None, None, None);
        assert!(matches!(result, Err(Error::MissingCorpus)));
    }

    #[test]
    fn test_phrases_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let result = build_generator(Some(Preset::Phrases), None, Some(&missing), None);
        assert!(matches!(
            result,
            Err(Error::Generate(passgen::Error::CollaboratorFailure(_)))
        ));
    }

    #[test]
    fn test_phrases_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("review.txt"),
            "The acting was superb from start to finish. A truly moving story about family.",
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let generator =
            build_generator(Some(Preset::Phrases), None, Some(dir.path()), None).unwrap();
        let password = generator.generate_password(&mut rng).unwrap();
        let digits = password.chars().rev().take(2);
        assert!(digits.clone().all(|c| c.is_ascii_digit()), "{password}");
    }

    #[test]
    fn test_words_file_replaces_vocabulary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "apple\nbanana\ncherry\n").unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let generator = build_generator(Some(Preset::Xkcd), None, None, Some(&path)).unwrap();
        let password = generator.generate_password(&mut rng).unwrap();
        let vocabulary = ["apple", "banana", "cherry"];
        assert!(
            password.split(' ').all(|w| vocabulary.contains(&w)),
            "{password}"
        );
    }

    #[test]
    fn test_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pipeline.json");
        fs::write(
            &path,
            r#"{
                "type": "pipeline",
                "units": [
                    {"type": "constant", "value": "pw-"},
                    {"type": "integers", "length": 3}
                ]
            }"#,
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let generator = build_generator(None, Some(&path), None, None).unwrap();
        let password = generator.generate_password(&mut rng).unwrap();
        assert!(password.starts_with("pw-"));
        assert_eq!(password.len(), 6);
    }

    #[test]
    fn test_config_and_preset_conflict() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pipeline.json");
        fs::write(&path, r#"{"type": "constant", "value": "x"}"#).unwrap();
        let result = build_generator(Some(Preset::Uuid), Some(&path), None, None);
        assert!(matches!(result, Err(Error::InvalidArgs)));
    }
}
