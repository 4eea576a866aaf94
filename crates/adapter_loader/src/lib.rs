//! # Adapter Loader
//!
//! Flat-file trade loaders feeding the pricing dispatcher:
//!
//! - [`BondTradeLoader`]: comma-separated bond trade files, one header line
//! - [`FxTradeLoader`]: `¬`-separated FX trade files, two header lines
//!
//! Both loaders produce a lazy, single-pass, non-restartable sequence of
//! trades. What happens to a malformed record is an explicit
//! [`MalformedRecordPolicy`] on the loader, not implicit control flow:
//! either the record is skipped with a logged warning and never yielded, or
//! the error is yielded to the caller.

mod bond;
mod error;
mod fx;

pub use bond::BondTradeLoader;
pub use error::LoadError;
pub use fx::FxTradeLoader;

use risk_core::types::Trade;

/// What a loader does with a record it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRecordPolicy {
    /// Log a warning and skip the record; it is never yielded
    SkipAndLog,
    /// Yield the parse error to the caller
    #[default]
    Fail,
}

/// A lazy stream of trade records: parsed trades, or load errors when the
/// loader's policy is [`MalformedRecordPolicy::Fail`].
pub type TradeRecords = Box<dyn Iterator<Item = Result<Trade, LoadError>>>;

/// Producer of a lazy, single-pass trade sequence from some backing store.
pub trait TradeLoader {
    /// Open the backing store and return the trade sequence.
    ///
    /// # Errors
    /// Fails only if the store cannot be opened; per-record failures are
    /// reported through the returned iterator according to the loader's
    /// malformed-record policy.
    fn load_trades(&self) -> Result<TradeRecords, LoadError>;
}
