//! CLI error type.

use thiserror::Error;

use adapter_loader::LoadError;
use risk_pricing::{DispatchError, RegistryError};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Engine registry construction failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A pricing run aborted
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Trade loading failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
