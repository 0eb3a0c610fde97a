//! Phrase mining from text, and random word lists.
//!
//! A mined phrase is a random sentence, lower-cased, with everything other
//! than letters, digits and whitespace removed, split into words. Sentences
//! shorter than the minimum word count are redrawn a bounded number of
//! times; the last attempt is used even if it is still short. Phrases longer
//! than the maximum keep their leading words.

use std::fmt;
use std::fs;
use std::path::Path;

use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, trace, warn};

use crate::count::CountRange;
use crate::error::{Error, Result};
use crate::generate::Generate;
use crate::source::{Corpus, PunctuationSplitter, SentenceSplitter};
use crate::vocabulary::BASIC_ENGLISH;

/// Word count used when a miner or word list is given no bounds.
pub const DEFAULT_WORDS: usize = 4;

/// Sentence draws allowed before settling for a short phrase.
pub const DEFAULT_RETRIES: usize = 10;

/// Lower-cases `sentence`, strips punctuation and splits it into words.
pub fn clean_words(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn default_count(words: Option<CountRange>) -> CountRange {
    words.unwrap_or(CountRange::exactly(DEFAULT_WORDS))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhraseRules {
    words: CountRange,
    retries: usize,
}

impl PhraseRules {
    fn new(words: Option<CountRange>) -> Self {
        Self {
            words: default_count(words),
            retries: DEFAULT_RETRIES,
        }
    }

    fn mine(&self, mut next_sentence: impl FnMut() -> Result<String>) -> Result<String> {
        let wanted = self.words.min();
        let mut words = Vec::new();
        for attempt in 0..self.retries.max(1) {
            words = clean_words(&next_sentence()?);
            if words.len() >= wanted {
                break;
            }
            trace!(attempt, found = words.len(), wanted, "phrase too short");
        }

        if words.len() < wanted {
            warn!(
                retries = self.retries,
                found = words.len(),
                wanted,
                "no phrase long enough, using the last one"
            );
        }
        words.truncate(self.words.max());
        Ok(words.join(" "))
    }
}

/// Mines phrases from a fixed text, segmented once at construction.
pub struct TextPhrase {
    sentences: Vec<String>,
    rules: PhraseRules,
    preview: String,
}

impl TextPhrase {
    pub fn new(text: &str, words: Option<CountRange>) -> Result<Self> {
        Self::with_splitter(text, words, &PunctuationSplitter)
    }

    pub fn with_splitter(
        text: &str,
        words: Option<CountRange>,
        splitter: &dyn SentenceSplitter,
    ) -> Result<Self> {
        let sentences = splitter.split(text);
        if sentences.is_empty() {
            return Err(no_sentences());
        }
        Ok(Self {
            sentences,
            rules: PhraseRules::new(words),
            preview: shorten(text, 25),
        })
    }

    pub fn retries(mut self, retries: usize) -> Self {
        self.rules.retries = retries;
        self
    }
}

fn no_sentences() -> Error {
    Error::CollaboratorFailure("text contains no sentences".to_string())
}

impl Generate for TextPhrase {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        let phrase = self.rules.mine(|| {
            self.sentences.choose(rng).cloned().ok_or_else(no_sentences)
        })?;
        Ok(format!("{seed}{phrase}"))
    }
}

impl fmt::Display for TextPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TextPhrase: {}, \"{}\">",
            self.rules.words,
            self.preview
        )
    }
}

/// Mines phrases from a random document of a corpus on every draw.
pub struct CorpusPhrase {
    corpus: Box<dyn Corpus>,
    splitter: Box<dyn SentenceSplitter>,
    rules: PhraseRules,
}

impl CorpusPhrase {
    pub fn new(corpus: impl Corpus + 'static, words: Option<CountRange>) -> Self {
        Self::with_splitter(corpus, words, PunctuationSplitter)
    }

    pub fn with_splitter(
        corpus: impl Corpus + 'static,
        words: Option<CountRange>,
        splitter: impl SentenceSplitter + 'static,
    ) -> Self {
        Self {
            corpus: Box::new(corpus),
            splitter: Box::new(splitter),
            rules: PhraseRules::new(words),
        }
    }

    pub fn retries(mut self, retries: usize) -> Self {
        self.rules.retries = retries;
        self
    }

    fn sentence(&self, rng: &mut dyn RngCore) -> Result<String> {
        let name = self.corpus.name();
        let ids = self.corpus.document_ids()?;
        let id = ids
            .choose(rng)
            .ok_or_else(|| Error::collaborator(name, "corpus has no documents"))?;

        let text = self.corpus.raw_text(id)?;
        debug!(corpus = name, document = %id, "drawing sentence");

        self.splitter
            .split(&text)
            .choose(rng)
            .cloned()
            .ok_or_else(|| {
                Error::collaborator(name, format_args!("document '{id}' has no sentences"))
            })
    }
}

impl Generate for CorpusPhrase {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        let phrase = self.rules.mine(|| self.sentence(rng))?;
        Ok(format!("{seed}{phrase}"))
    }
}

impl fmt::Display for CorpusPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<CorpusPhrase: {}, {}>",
            self.rules.words,
            self.corpus.name()
        )
    }
}

/// Appends a random number of words drawn, with replacement, from a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Words {
    vocabulary: Vec<String>,
    count: CountRange,
}

impl Words {
    pub fn new(vocabulary: Vec<String>, count: Option<CountRange>) -> Result<Self> {
        if vocabulary.is_empty() {
            return Err(Error::CollaboratorFailure("word list is empty".to_string()));
        }
        Ok(Self {
            vocabulary,
            count: default_count(count),
        })
    }

    /// Uses the embedded basic English vocabulary.
    pub fn basic(count: Option<CountRange>) -> Self {
        Self {
            vocabulary: BASIC_ENGLISH.iter().map(|w| w.to_string()).collect(),
            count: default_count(count),
        }
    }

    /// Loads a word file: lower-cased, split on anything that is not
    /// alphanumeric, keeping words longer than three characters.
    pub fn from_file(path: impl AsRef<Path>, count: Option<CountRange>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(parse_word_list(&text), count)
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

fn parse_word_list(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

impl Generate for Words {
    fn generate(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String> {
        let n = self.count.sample(rng);
        let words: Vec<&str> = (0..n)
            .filter_map(|_| self.vocabulary.choose(rng).map(String::as_str))
            .collect();
        Ok(format!("{seed}{}", words.join(" ")))
    }
}

impl fmt::Display for Words {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Words: {}, {} words>", self.count, self.vocabulary.len())
    }
}

fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() < width {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(width).collect::<String>())
    }
}
