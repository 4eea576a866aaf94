//! Error types for trade construction and outcome recording.

use thiserror::Error;

/// Errors raised when constructing a [`Trade`](crate::types::Trade).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    /// Trade id was empty or whitespace-only
    #[error("a valid non-empty trade id must be provided")]
    EmptyTradeId,

    /// Trade type does not belong to the family being constructed
    #[error("trade type {trade_type} is not a {family} trade type")]
    WrongFamily {
        /// The offending trade type tag
        trade_type: String,
        /// The family the constructor builds
        family: &'static str,
    },

    /// Trade type tag not in the known closed set
    #[error("unknown trade type: {0}")]
    UnknownTradeType(String),
}

/// Errors raised when recording an outcome into a result sink.
///
/// Both variants are fatal: a second write for the same trade id on the
/// same mapping aborts the pricing run rather than overwriting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// A result has already been recorded for this trade id
    #[error("a result has already been recorded for trade {0}")]
    DuplicateResult(String),

    /// An error has already been recorded for this trade id
    #[error("an error has already been recorded for trade {0}")]
    DuplicateError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_display_names_trade() {
        let err = SinkError::DuplicateResult("TR1".to_string());
        assert!(err.to_string().contains("TR1"));

        let err = SinkError::DuplicateError("TR2".to_string());
        assert!(err.to_string().contains("TR2"));
    }
}
