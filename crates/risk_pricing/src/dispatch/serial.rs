//! Single-threaded dispatch strategy.

use std::sync::Arc;

use risk_core::traits::ScalarResultSink;
use tracing::debug;

use super::{process_trade, TradeDispatcher, TradeStream};
use crate::error::DispatchError;
use crate::registry::EngineRegistry;

/// Prices trades one at a time on the calling thread, in stream order.
///
/// Establishes the reference outcome set that
/// [`ParallelDispatcher`](crate::dispatch::ParallelDispatcher) must
/// reproduce for deterministic engines.
pub struct SerialDispatcher {
    registry: Arc<EngineRegistry>,
}

impl SerialDispatcher {
    /// Create a serial dispatcher over `registry`.
    pub fn new(registry: Arc<EngineRegistry>) -> Self {
        Self { registry }
    }
}

impl TradeDispatcher for SerialDispatcher {
    fn dispatch(
        &self,
        streams: Vec<TradeStream<'_>>,
        sink: &mut dyn ScalarResultSink,
    ) -> Result<(), DispatchError> {
        let mut processed = 0usize;
        for stream in streams {
            for trade in stream {
                process_trade(&self.registry, &trade, sink)?;
                processed += 1;
            }
        }
        debug!(trades = processed, "serial pricing run complete");
        Ok(())
    }
}
