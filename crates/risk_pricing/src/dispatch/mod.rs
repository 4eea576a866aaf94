//! Trade dispatch strategies.
//!
//! Two interchangeable strategies consume trade streams, resolve each
//! trade's engine through the [`EngineRegistry`](crate::registry::EngineRegistry)
//! and record outcomes into the caller's sink:
//!
//! - [`SerialDispatcher`]: single-threaded, deterministic reference
//!   behaviour
//! - [`ParallelDispatcher`]: bounded worker pool over a pre-populated queue
//!
//! For deterministic engines the two strategies produce identical outcome
//! sets; neither guarantees any processing order.

mod parallel;
mod serial;

pub use parallel::ParallelDispatcher;
pub use serial::SerialDispatcher;

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use risk_core::traits::ScalarResultSink;
use risk_core::types::Trade;
use tracing::warn;

use crate::error::DispatchError;
use crate::registry::EngineRegistry;

/// Error outcome recorded for trades whose type has no bound engine.
pub const NO_ENGINE_ERROR: &str = "No Pricing Engines available for this trade type";

/// One lazily produced stream of trades.
pub type TradeStream<'a> = Box<dyn Iterator<Item = Trade> + 'a>;

/// A trade dispatch strategy.
///
/// Flattens the given streams in input order and records exactly one
/// outcome per trade into `sink`. Returns only once every trade has been
/// processed. Fatal sink errors (duplicate outcome writes) abort the run;
/// per-trade failures are recorded as trade outcomes and the run continues.
pub trait TradeDispatcher {
    /// Price every trade in `streams`, writing outcomes into `sink`.
    fn dispatch(
        &self,
        streams: Vec<TradeStream<'_>>,
        sink: &mut dyn ScalarResultSink,
    ) -> Result<(), DispatchError>;
}

/// Resolve and invoke the engine for one trade, applying the shared
/// per-trade policy of both dispatch strategies.
///
/// A missing engine or an engine panic becomes the trade's error outcome;
/// only sink failures propagate.
pub(crate) fn process_trade(
    registry: &EngineRegistry,
    trade: &Trade,
    sink: &mut dyn ScalarResultSink,
) -> Result<(), DispatchError> {
    let Some(engine) = registry.resolve(trade.trade_type()) else {
        sink.add_error(trade.trade_id(), NO_ENGINE_ERROR)?;
        return Ok(());
    };

    // Each trade is an independent unit of work: a fault in one engine call
    // must not stop the rest of the run.
    match catch_unwind(AssertUnwindSafe(|| engine.price(trade, sink))) {
        Ok(outcome) => outcome.map_err(DispatchError::from),
        Err(panic) => {
            let reason = panic_reason(panic.as_ref());
            warn!(
                trade_id = trade.trade_id(),
                trade_type = %trade.trade_type(),
                reason,
                "pricing engine panicked"
            );
            sink.add_error(
                trade.trade_id(),
                &format!("Pricing engine failed: {reason}"),
            )?;
            Ok(())
        }
    }
}

fn panic_reason(panic: &(dyn Any + Send)) -> &str {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}
