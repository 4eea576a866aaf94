//! Pricing engine capability trait.

use crate::types::{SinkError, Trade};

use super::ScalarResultSink;

/// The capability that prices a single trade.
///
/// Implementations are registered per trade type and are the system's
/// intended extension point. `price` must write exactly one outcome for
/// `trade.trade_id()` into `sink` before returning: a numeric result on
/// success, or an error message when the trade cannot be priced. An engine
/// must not assume exclusive access to the sink; under the parallel
/// dispatcher the sink is a synchronised adapter shared between workers.
///
/// Engines are `Send + Sync` so a registry of engines can be read
/// concurrently by worker threads without further locking.
pub trait PricingEngine: Send + Sync {
    /// Price `trade`, recording the outcome into `sink`.
    ///
    /// # Errors
    /// Only sink failures (duplicate outcome writes) are returned, and they
    /// are fatal to the run. Pricing failures are not errors at this
    /// level: they are recorded into the sink as the trade's error outcome.
    fn price(&self, trade: &Trade, sink: &mut dyn ScalarResultSink) -> Result<(), SinkError>;
}
