//! Bounded worker-pool dispatch strategy.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use risk_core::traits::ScalarResultSink;
use risk_core::types::{SinkError, Trade};
use tracing::debug;

use super::{process_trade, TradeDispatcher, TradeStream};
use crate::error::DispatchError;
use crate::registry::EngineRegistry;

/// Prices trades on a bounded pool of workers.
///
/// The flattened trade set is fully materialised into a FIFO work queue
/// before any worker starts, so queue emptiness is a true end condition:
/// workers pop until the queue is drained and never block waiting for more
/// work. All writes to the caller's sink are serialised behind a single
/// lock. `dispatch` blocks until every worker has terminated.
///
/// No ordering is guaranteed between trades; for deterministic engines the
/// final outcome set is identical to the one produced by
/// [`SerialDispatcher`](crate::dispatch::SerialDispatcher).
pub struct ParallelDispatcher {
    registry: Arc<EngineRegistry>,
    workers: usize,
}

impl ParallelDispatcher {
    /// Create a parallel dispatcher with one worker per available hardware
    /// thread.
    pub fn new(registry: Arc<EngineRegistry>) -> Self {
        Self::with_workers(registry, num_cpus::get())
    }

    /// Create a parallel dispatcher with an explicit degree of parallelism.
    pub fn with_workers(registry: Arc<EngineRegistry>, workers: usize) -> Self {
        // 0 would hand pool sizing back to rayon; one worker is the floor
        Self {
            registry,
            workers: workers.max(1),
        }
    }

    /// Degree of parallelism this dispatcher runs with.
    pub fn workers(&self) -> usize {
        self.workers
    }

    fn drain_queue(
        &self,
        queue: &Mutex<VecDeque<Trade>>,
        sink: &SynchronizedSink<'_>,
    ) -> Result<(), DispatchError> {
        while let Some(trade) = pop_front(queue) {
            let mut sink_ref = sink;
            process_trade(&self.registry, &trade, &mut sink_ref)?;
        }
        Ok(())
    }
}

impl TradeDispatcher for ParallelDispatcher {
    fn dispatch(
        &self,
        streams: Vec<TradeStream<'_>>,
        sink: &mut dyn ScalarResultSink,
    ) -> Result<(), DispatchError> {
        // Materialise the full trade set before any worker starts.
        let trades: VecDeque<Trade> = streams.into_iter().flatten().collect();
        let total = trades.len();
        let queue = Mutex::new(trades);

        let sync_sink = SynchronizedSink::new(sink);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("pricing-worker-{i}"))
            .build()
            .map_err(|e| DispatchError::WorkerPool(e.to_string()))?;

        debug!(
            trades = total,
            workers = self.workers,
            "starting parallel pricing run"
        );

        // broadcast runs the drain loop on every pool thread and joins them
        // all before returning.
        let worker_outcomes = pool.broadcast(|_| self.drain_queue(&queue, &sync_sink));

        worker_outcomes.into_iter().collect()
    }
}

fn pop_front(queue: &Mutex<VecDeque<Trade>>) -> Option<Trade> {
    // A poisoned lock still holds a consistent queue: workers only pop
    // under the lock and never panic while holding it.
    match queue.lock() {
        Ok(mut guard) => guard.pop_front(),
        Err(poisoned) => poisoned.into_inner().pop_front(),
    }
}

/// Serialises every write to the wrapped sink behind one lock, so two
/// workers can never interleave a write to the same underlying mapping.
struct SynchronizedSink<'a> {
    inner: Mutex<&'a mut dyn ScalarResultSink>,
}

impl<'a> SynchronizedSink<'a> {
    fn new(inner: &'a mut dyn ScalarResultSink) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}

// Workers share the adapter by reference; each holds its own `&mut` to
// that shared reference to satisfy the sink trait's receiver.
impl ScalarResultSink for &SynchronizedSink<'_> {
    fn add_result(&mut self, trade_id: &str, result: f64) -> Result<(), SinkError> {
        match self.inner.lock() {
            Ok(mut guard) => guard.add_result(trade_id, result),
            Err(poisoned) => poisoned.into_inner().add_result(trade_id, result),
        }
    }

    fn add_error(&mut self, trade_id: &str, error: &str) -> Result<(), SinkError> {
        match self.inner.lock() {
            Ok(mut guard) => guard.add_error(trade_id, error),
            Err(poisoned) => poisoned.into_inner().add_error(trade_id, error),
        }
    }
}
