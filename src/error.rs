use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("single_keys must contain at least one non-whitespace key")]
    EmptySingleKeys,
    #[error("paragraph must contain at least one character")]
    EmptyParagraph,
    #[error("combination_length must be greater than zero")]
    ZeroCombinationLength,
    #[error("unknown practice mode `{0}` (expected single-keys, combination or paragraph)")]
    UnknownMode(String),
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
