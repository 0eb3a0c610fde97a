use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid mapping {source_chars:?} -> {targets:?}: {reason}")]
    InvalidMapping {
        source_chars: String,
        targets: String,
        reason: &'static str,
    },

    #[error("invalid count for {field}: {value} (counts must be non-negative)")]
    InvalidCount {
        field: &'static str,
        value: i64,
    },

    #[error("unknown case '{0}'")]
    UnknownCase(String),

    #[error("random string alphabet has no characters")]
    EmptyAlphabet,

    #[error("unsupported uuid variant {0}: expected a value in 0..4")]
    UnsupportedVariant(usize),

    #[error("{0}")]
    CollaboratorFailure(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pipeline configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn collaborator(
        context: impl std::fmt::Display,
        cause: impl std::fmt::Display,
    ) -> Self {
        Error::CollaboratorFailure(format!("{context}: {cause}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
