//! Scalar pricing outcomes and the per-run aggregator.

use std::collections::{HashMap, HashSet};

use super::error::SinkError;
use crate::traits::ScalarResultSink;

/// The recorded outcome of pricing one trade.
///
/// A trade id ends up with a numeric result, an error, or (if an engine
/// misbehaved) both; the two are stored independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarResult {
    /// Trade identifier
    pub trade_id: String,
    /// Numeric pricing result, if one was recorded
    pub result: Option<f64>,
    /// Error message, if one was recorded
    pub error: Option<String>,
}

/// Thread-unaware aggregator of pricing outcomes, keyed by trade id.
///
/// Owns two independent mappings, `trade_id -> result` and
/// `trade_id -> error`. A second write for the same trade id on the same
/// mapping is a hard [`SinkError`], not an overwrite.
///
/// One `ScalarResults` is created per pricing run, populated by the
/// dispatcher and read back after all workers have joined. It performs no
/// synchronisation of its own; the parallel dispatcher serialises writes
/// through its own adapter.
#[derive(Debug, Default, PartialEq)]
pub struct ScalarResults {
    results: HashMap<String, f64>,
    errors: HashMap<String, String>,
}

impl ScalarResults {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff an outcome of either kind has been recorded for `trade_id`.
    pub fn contains_trade(&self, trade_id: &str) -> bool {
        self.results.contains_key(trade_id) || self.errors.contains_key(trade_id)
    }

    /// The outcome recorded for `trade_id`, if any.
    pub fn get(&self, trade_id: &str) -> Option<ScalarResult> {
        if !self.contains_trade(trade_id) {
            return None;
        }

        Some(ScalarResult {
            trade_id: trade_id.to_string(),
            result: self.results.get(trade_id).copied(),
            error: self.errors.get(trade_id).cloned(),
        })
    }

    /// Number of distinct trade ids with at least one outcome.
    pub fn len(&self) -> usize {
        let mut ids: HashSet<&str> = self.results.keys().map(String::as_str).collect();
        ids.extend(self.errors.keys().map(String::as_str));
        ids.len()
    }

    /// True iff no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.errors.is_empty()
    }

    /// Iterate over one [`ScalarResult`] per distinct trade id, taking the
    /// union of the result and error mappings. Iteration order is
    /// unspecified.
    pub fn iter(&self) -> impl Iterator<Item = ScalarResult> + '_ {
        let mut ids: HashSet<&str> = self.results.keys().map(String::as_str).collect();
        ids.extend(self.errors.keys().map(String::as_str));

        ids.into_iter().map(|trade_id| ScalarResult {
            trade_id: trade_id.to_string(),
            result: self.results.get(trade_id).copied(),
            error: self.errors.get(trade_id).cloned(),
        })
    }
}

impl ScalarResultSink for ScalarResults {
    fn add_result(&mut self, trade_id: &str, result: f64) -> Result<(), SinkError> {
        if self.results.contains_key(trade_id) {
            return Err(SinkError::DuplicateResult(trade_id.to_string()));
        }
        self.results.insert(trade_id.to_string(), result);
        Ok(())
    }

    fn add_error(&mut self, trade_id: &str, error: &str) -> Result<(), SinkError> {
        if self.errors.contains_key(trade_id) {
            return Err(SinkError::DuplicateError(trade_id.to_string()));
        }
        self.errors.insert(trade_id.to_string(), error.to_string());
        Ok(())
    }
}
