//! Outcome sink trait.

use crate::types::SinkError;

/// Receiver of scalar pricing outcomes, keyed by trade id.
///
/// At most one result and at most one error may be recorded per trade id;
/// a second write on the same mapping fails with a [`SinkError`], which
/// callers must treat as fatal for the pricing run.
///
/// Sinks are `Send` because the parallel dispatcher moves a reference to
/// the caller's sink across worker threads (behind its own lock).
pub trait ScalarResultSink: Send {
    /// Record the numeric pricing result for a trade.
    ///
    /// # Errors
    /// [`SinkError::DuplicateResult`] if a result already exists for
    /// `trade_id`.
    fn add_result(&mut self, trade_id: &str, result: f64) -> Result<(), SinkError>;

    /// Record a pricing error for a trade.
    ///
    /// # Errors
    /// [`SinkError::DuplicateError`] if an error already exists for
    /// `trade_id`.
    fn add_error(&mut self, trade_id: &str, error: &str) -> Result<(), SinkError>;
}
