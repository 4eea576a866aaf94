//! FX pricing engines.

use risk_core::prelude::*;

/// Annualised carry adjustment applied over the spot-to-value-date gap.
const FORWARD_CARRY: f64 = 0.01;

/// Day count basis for the forward carry accrual.
const DAYS_PER_YEAR: f64 = 365.0;

/// Prices FX spot trades at the traded rate.
pub struct FxSpotEngine;

impl PricingEngine for FxSpotEngine {
    fn price(&self, trade: &Trade, sink: &mut dyn ScalarResultSink) -> Result<(), SinkError> {
        sink.add_result(trade.trade_id(), trade.notional() * trade.rate())
    }
}

/// Prices FX forwards at the traded rate adjusted for carry to value date.
pub struct FxForwardEngine;

impl PricingEngine for FxForwardEngine {
    fn price(&self, trade: &Trade, sink: &mut dyn ScalarResultSink) -> Result<(), SinkError> {
        let Some(value_date) = trade.value_date() else {
            return sink.add_error(trade.trade_id(), "FX forward trade has no value date");
        };

        let days = (value_date - trade.trade_date()).num_days() as f64;
        let carry = 1.0 + FORWARD_CARRY * days / DAYS_PER_YEAR;
        sink.add_result(trade.trade_id(), trade.notional() * trade.rate() * carry)
    }
}
