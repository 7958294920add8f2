use crate::game::Move;

/// Errors that can occur while running a match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("agent selected illegal move {mv} (legal: {legal:?})")]
    IllegalMove { mv: Move, legal: Vec<Move> },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
