use thiserror::Error;

/// Custom error types for modal-keys
#[derive(Debug, Error)]
pub enum ModalKeysError {
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid key notation at position {position}: {reason}")]
    InvalidKeyNotation { position: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
