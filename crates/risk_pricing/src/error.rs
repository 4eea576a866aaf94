//! Error types for registry construction and trade dispatch.

use risk_core::types::SinkError;
use thiserror::Error;

/// Fatal errors raised while building an [`EngineRegistry`](crate::registry::EngineRegistry).
///
/// A pricing run cannot proceed with a partially built registry, so every
/// variant aborts registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A binding has no trade type
    #[error("trade type not specified in engine binding")]
    MissingTradeType,

    /// A binding names a trade type outside the known closed set
    #[error("unknown trade type '{0}' in engine binding")]
    UnknownTradeType(String),

    /// A binding has no module reference or no engine identifier
    #[error("module or pricing engine not specified for trade type: {trade_type}")]
    MissingEngineReference {
        /// Trade type of the incomplete binding
        trade_type: String,
    },

    /// The catalog holds no factory for the referenced engine
    #[error("no pricing engine '{engine}' in module '{module}' for trade type: {trade_type}")]
    UnknownEngine {
        /// Module reference from the binding
        module: String,
        /// Engine identifier from the binding
        engine: String,
        /// Trade type of the binding
        trade_type: String,
    },

    /// The engine factory failed to construct an instance
    #[error("failed to construct pricing engine for trade type: {trade_type}: {reason}")]
    Construction {
        /// Trade type of the binding
        trade_type: String,
        /// Factory failure description
        reason: String,
    },

    /// Two bindings name the same trade type
    #[error("duplicate engine binding for trade type: {0}")]
    DuplicateBinding(String),
}

/// Fatal errors raised by a dispatch run.
///
/// Per-trade failures (missing engines, engine faults) are recorded as
/// trade outcomes and never surface here; only run-aborting conditions do.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Duplicate outcome write for a trade id
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// The parallel worker pool could not be started
    #[error("failed to start pricing worker pool: {0}")]
    WorkerPool(String),
}
