//! Price command implementation
//!
//! Loads trade files, builds the engine registry from configuration and
//! runs the selected dispatch strategy, printing the aggregated outcomes.

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use tracing::info;

use adapter_loader::{BondTradeLoader, FxTradeLoader, TradeLoader, TradeRecords};
use risk_core::types::{ScalarResults, Trade};
use risk_pricing::{
    EngineCatalog, EngineRegistry, ParallelDispatcher, SerialDispatcher, TradeDispatcher,
    TradeStream,
};

use crate::config::PricingConfig;
use crate::{report, Result};

/// Dispatch strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DispatchMode {
    /// Single-threaded, in stream order
    Serial,
    /// Bounded worker pool
    Parallel,
}

/// Run the price command
pub fn run(
    config_path: &str,
    bond_files: &[String],
    fx_files: &[String],
    mode: DispatchMode,
    workers: Option<usize>,
) -> Result<()> {
    let config = PricingConfig::load(Path::new(config_path))?;
    let registry = Arc::new(EngineRegistry::from_bindings(
        &config.engines,
        &EngineCatalog::builtin(),
    )?);
    info!(engines = registry.len(), "pricing engine registry built");

    let mut portfolios: Vec<Vec<Trade>> = Vec::new();
    for path in bond_files {
        portfolios.push(collect_trades(BondTradeLoader::new(path).load_trades()?)?);
    }
    for path in fx_files {
        portfolios.push(collect_trades(FxTradeLoader::new(path).load_trades()?)?);
    }

    let total: usize = portfolios.iter().map(Vec::len).sum();
    info!(files = portfolios.len(), trades = total, "trade files loaded");

    let dispatcher: Box<dyn TradeDispatcher> = match mode {
        DispatchMode::Serial => Box::new(SerialDispatcher::new(registry)),
        DispatchMode::Parallel => Box::new(match workers {
            Some(workers) => ParallelDispatcher::with_workers(registry, workers),
            None => ParallelDispatcher::new(registry),
        }),
    };

    let streams: Vec<TradeStream<'_>> = portfolios
        .into_iter()
        .map(|trades| Box::new(trades.into_iter()) as TradeStream<'_>)
        .collect();

    let mut results = ScalarResults::new();
    dispatcher.dispatch(streams, &mut results)?;

    let errors = results.iter().filter(|r| r.error.is_some()).count();
    info!(outcomes = results.len(), errors, "pricing run complete");

    report::write_results(&mut io::stdout().lock(), &results)?;
    Ok(())
}

fn collect_trades(records: TradeRecords) -> Result<Vec<Trade>> {
    let mut trades = Vec::new();
    for record in records {
        trades.push(record?);
    }
    Ok(trades)
}
