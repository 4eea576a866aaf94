//! Dispatch Strategy Integration Tests
//!
//! Exercises the serial and parallel dispatchers end to end against the
//! built-in engine catalog: outcome-set equivalence, missing-engine policy,
//! engine fault isolation and duplicate-outcome fatality.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;

use risk_core::prelude::*;
use risk_pricing::dispatch::NO_ENGINE_ERROR;
use risk_pricing::{
    EngineBinding, EngineCatalog, EngineRegistry, ParallelDispatcher, SerialDispatcher,
    TradeDispatcher, TradeStream,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn binding(trade_type: &str, module: &str, engine: &str) -> EngineBinding {
    EngineBinding {
        trade_type: trade_type.to_string(),
        module: module.to_string(),
        engine: engine.to_string(),
    }
}

/// Registry with FxSpot deliberately left unbound.
fn partial_registry() -> Arc<EngineRegistry> {
    let bindings = vec![
        binding("GovBond", "engines::bond", "GovBondEngine"),
        binding("CorpBond", "engines::bond", "CorpBondEngine"),
        binding("FxFwd", "engines::fx", "FxForwardEngine"),
    ];
    Arc::new(EngineRegistry::from_bindings(&bindings, &EngineCatalog::builtin()).unwrap())
}

/// Deterministic trade keyed by index; `selector` picks the trade type.
fn make_trade(index: usize, selector: u8) -> Trade {
    let trade_id = format!("T{index}");
    let notional = 1_000.0 * (index as f64 + 1.0);
    let rate = 0.01 * (f64::from(selector % 4) + 1.0);

    match selector % 4 {
        0 => Trade::bond(
            trade_id,
            TradeType::GovBond,
            date("2023-01-01"),
            "GILT30",
            "ACME",
            notional,
            rate,
        )
        .unwrap(),
        1 => Trade::bond(
            trade_id,
            TradeType::CorpBond,
            date("2023-01-01"),
            "BOND123",
            "ACME",
            notional,
            rate,
        )
        .unwrap(),
        2 => Trade::fx(
            trade_id,
            TradeType::FxSpot,
            date("2023-01-01"),
            "GBPUSD",
            "ACME",
            notional,
            rate,
            date("2023-01-03"),
        )
        .unwrap(),
        _ => Trade::fx(
            trade_id,
            TradeType::FxFwd,
            date("2023-01-01"),
            "EURUSD",
            "ACME",
            notional,
            rate,
            date("2023-06-01"),
        )
        .unwrap(),
    }
}

fn stream_of(trades: Vec<Trade>) -> Vec<TradeStream<'static>> {
    vec![Box::new(trades.into_iter())]
}

#[test]
fn test_serial_and_parallel_agree_on_mixed_portfolio() {
    let trades: Vec<Trade> = (0..40).map(|i| make_trade(i, (i % 4) as u8)).collect();

    let mut serial_results = ScalarResults::new();
    SerialDispatcher::new(partial_registry())
        .dispatch(stream_of(trades.clone()), &mut serial_results)
        .unwrap();

    let mut parallel_results = ScalarResults::new();
    ParallelDispatcher::with_workers(partial_registry(), 4)
        .dispatch(stream_of(trades), &mut parallel_results)
        .unwrap();

    assert_eq!(serial_results, parallel_results);
    assert_eq!(serial_results.len(), 40);
}

#[test]
fn test_bound_types_never_get_no_engine_error() {
    let trades: Vec<Trade> = (0..12)
        .map(|i| make_trade(i, [0u8, 1, 3][i % 3]))
        .collect();

    let mut results = ScalarResults::new();
    ParallelDispatcher::with_workers(partial_registry(), 3)
        .dispatch(stream_of(trades), &mut results)
        .unwrap();

    for outcome in results.iter() {
        assert_ne!(outcome.error.as_deref(), Some(NO_ENGINE_ERROR));
        assert!(outcome.result.is_some());
    }
}

#[test]
fn test_unbound_types_always_get_no_engine_error() {
    // selector 2 = FxSpot, unbound in partial_registry
    let trades: Vec<Trade> = (0..8).map(|i| make_trade(i, 2)).collect();

    let mut results = ScalarResults::new();
    ParallelDispatcher::with_workers(partial_registry(), 2)
        .dispatch(stream_of(trades), &mut results)
        .unwrap();

    assert_eq!(results.len(), 8);
    for outcome in results.iter() {
        assert_eq!(outcome.error.as_deref(), Some(NO_ENGINE_ERROR));
        assert!(outcome.result.is_none());
    }
}

#[test]
fn test_parallel_has_no_lost_updates_across_repeated_runs() {
    let trades: Vec<Trade> = (0..100).map(|i| make_trade(i, (i % 2) as u8)).collect();
    let registry = partial_registry();

    for _ in 0..20 {
        let mut results = ScalarResults::new();
        ParallelDispatcher::with_workers(Arc::clone(&registry), 8)
            .dispatch(stream_of(trades.clone()), &mut results)
            .unwrap();

        assert_eq!(results.len(), 100);
        for trade in &trades {
            assert!(results.get(trade.trade_id()).unwrap().result.is_some());
        }
    }
}

#[test]
fn test_parallel_with_more_workers_than_trades() {
    let trades = vec![make_trade(0, 0), make_trade(1, 1)];

    let mut results = ScalarResults::new();
    ParallelDispatcher::with_workers(partial_registry(), 16)
        .dispatch(stream_of(trades), &mut results)
        .unwrap();

    assert_eq!(results.len(), 2);
}

#[test]
fn test_parallel_with_empty_trade_set() {
    let mut results = ScalarResults::new();
    ParallelDispatcher::with_workers(partial_registry(), 4)
        .dispatch(Vec::new(), &mut results)
        .unwrap();

    assert!(results.is_empty());
}

/// Panics for every trade it is asked to price.
struct PanickingEngine;

impl PricingEngine for PanickingEngine {
    fn price(&self, trade: &Trade, _sink: &mut dyn ScalarResultSink) -> Result<(), SinkError> {
        panic!("model blew up for {}", trade.trade_id());
    }
}

fn registry_with_panicking_gov_bond() -> Arc<EngineRegistry> {
    let mut catalog = EngineCatalog::builtin();
    catalog.register("engines::test", "PanickingEngine", || {
        Ok(Box::new(PanickingEngine))
    });

    let bindings = vec![
        binding("GovBond", "engines::test", "PanickingEngine"),
        binding("CorpBond", "engines::bond", "CorpBondEngine"),
    ];
    Arc::new(EngineRegistry::from_bindings(&bindings, &catalog).unwrap())
}

#[test]
fn test_engine_panic_is_isolated_per_trade() {
    let registry = registry_with_panicking_gov_bond();
    let trades: Vec<Trade> = (0..10).map(|i| make_trade(i, (i % 2) as u8)).collect();

    for dispatcher in [
        Box::new(SerialDispatcher::new(Arc::clone(&registry))) as Box<dyn TradeDispatcher>,
        Box::new(ParallelDispatcher::with_workers(Arc::clone(&registry), 4)),
    ] {
        let mut results = ScalarResults::new();
        dispatcher
            .dispatch(stream_of(trades.clone()), &mut results)
            .unwrap();

        assert_eq!(results.len(), 10);
        for trade in &trades {
            let outcome = results.get(trade.trade_id()).unwrap();
            match trade.trade_type() {
                TradeType::GovBond => {
                    let error = outcome.error.expect("panicking engine records an error");
                    assert!(error.starts_with("Pricing engine failed:"), "{error}");
                }
                _ => assert!(outcome.result.is_some()),
            }
        }
    }
}

/// Misbehaving engine that records two results for the same trade.
struct DoubleWritingEngine;

impl PricingEngine for DoubleWritingEngine {
    fn price(&self, trade: &Trade, sink: &mut dyn ScalarResultSink) -> Result<(), SinkError> {
        sink.add_result(trade.trade_id(), 1.0)?;
        sink.add_result(trade.trade_id(), 2.0)
    }
}

#[test]
fn test_duplicate_outcome_write_is_fatal_in_both_strategies() {
    let mut catalog = EngineCatalog::builtin();
    catalog.register("engines::test", "DoubleWritingEngine", || {
        Ok(Box::new(DoubleWritingEngine))
    });
    let bindings = vec![binding("GovBond", "engines::test", "DoubleWritingEngine")];
    let registry = Arc::new(EngineRegistry::from_bindings(&bindings, &catalog).unwrap());

    let trades = vec![make_trade(0, 0)];

    let mut results = ScalarResults::new();
    let err = SerialDispatcher::new(Arc::clone(&registry))
        .dispatch(stream_of(trades.clone()), &mut results)
        .unwrap_err();
    assert!(err.to_string().contains("already been recorded"));

    let mut results = ScalarResults::new();
    let err = ParallelDispatcher::with_workers(registry, 2)
        .dispatch(stream_of(trades), &mut results)
        .unwrap_err();
    assert!(err.to_string().contains("already been recorded"));
}

proptest! {
    /// For any trade set with unique ids, the serial and parallel
    /// strategies produce identical outcome sets.
    #[test]
    fn prop_serial_and_parallel_outcome_sets_are_equal(
        selectors in prop::collection::vec(0u8..4, 0..48),
        workers in 1usize..8,
    ) {
        let trades: Vec<Trade> = selectors
            .iter()
            .enumerate()
            .map(|(i, sel)| make_trade(i, *sel))
            .collect();

        let mut serial_results = ScalarResults::new();
        SerialDispatcher::new(partial_registry())
            .dispatch(stream_of(trades.clone()), &mut serial_results)
            .unwrap();

        let mut parallel_results = ScalarResults::new();
        ParallelDispatcher::with_workers(partial_registry(), workers)
            .dispatch(stream_of(trades), &mut parallel_results)
            .unwrap();

        prop_assert_eq!(serial_results, parallel_results);
    }
}
