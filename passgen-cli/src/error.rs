#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] passgen::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The phrases preset needs a corpus directory. Pass one with --corpus.")]
    MissingCorpus,

    #[error("Cannot use --config and --preset together")]
    InvalidArgs,
}
