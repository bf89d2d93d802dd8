//! Error types for seqmerge-core

use std::path::PathBuf;

/// Result type for seqmerge-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in seqmerge-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller passed an empty repository location or branch list
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The repository could not be opened or its branches listed
    #[error("Cannot access repository at {path}: {source}")]
    RepositoryAccess {
        path: PathBuf,
        #[source]
        source: seqmerge_git::Error,
    },

    /// Branch listing failed on an already opened backend
    #[error("Failed to list branches: {0}")]
    BranchListing(#[source] seqmerge_git::Error),

    /// Configuration file given explicitly but not present
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// A configuration file is not valid TOML or has invalid settings
    #[error("Invalid configuration in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Requested chain is not defined in the configuration
    #[error("Chain '{name}' is not defined in the configuration")]
    ChainNotFound { name: String },

    // Transparent wrappers for underlying errors
    /// Checkout or merge failure that is not a structured conflict
    #[error(transparent)]
    Git(#[from] seqmerge_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
