//! # Risk Core
//!
//! Foundation types for the trade pricing system:
//!
//! - [`types::Trade`]: immutable trade entity covering the bond and FX families
//! - [`types::ScalarResults`]: the per-run outcome aggregator, keyed by trade id
//! - [`traits::PricingEngine`]: the capability that prices one trade
//! - [`traits::ScalarResultSink`]: the outcome sink engines write through
//!
//! This crate holds no concurrency machinery of its own; the serial and
//! parallel dispatch strategies live in `risk_pricing` and build on the
//! contracts defined here.

pub mod traits;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::traits::{PricingEngine, ScalarResultSink};
    pub use crate::types::{
        ScalarResult, ScalarResults, SinkError, Trade, TradeError, TradeFamily, TradeType,
    };
}
