//! Bond pricing engines.

use risk_core::prelude::*;

/// Flat credit spread applied to corporate bond coupons, in rate terms.
const CORP_CREDIT_SPREAD: f64 = 0.002;

/// Prices government bonds as one flat annual coupon accrual.
pub struct GovBondEngine;

impl PricingEngine for GovBondEngine {
    fn price(&self, trade: &Trade, sink: &mut dyn ScalarResultSink) -> Result<(), SinkError> {
        sink.add_result(trade.trade_id(), trade.notional() * trade.rate())
    }
}

/// Prices corporate bonds as a flat coupon accrual plus a credit spread.
pub struct CorpBondEngine;

impl PricingEngine for CorpBondEngine {
    fn price(&self, trade: &Trade, sink: &mut dyn ScalarResultSink) -> Result<(), SinkError> {
        let coupon = trade.notional() * (trade.rate() + CORP_CREDIT_SPREAD);
        sink.add_result(trade.trade_id(), coupon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn bond(trade_type: TradeType) -> Trade {
        Trade::bond(
            "TR1",
            trade_type,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            "BOND123",
            "ACME",
            1_000_000.0,
            0.05,
        )
        .unwrap()
    }

    #[test]
    fn test_gov_bond_coupon_accrual() {
        let mut results = ScalarResults::new();
        GovBondEngine
            .price(&bond(TradeType::GovBond), &mut results)
            .unwrap();

        assert_relative_eq!(results.get("TR1").unwrap().result.unwrap(), 50_000.0);
        assert!(results.get("TR1").unwrap().error.is_none());
    }

    #[test]
    fn test_corp_bond_applies_credit_spread() {
        let mut results = ScalarResults::new();
        CorpBondEngine
            .price(&bond(TradeType::CorpBond), &mut results)
            .unwrap();

        assert_relative_eq!(results.get("TR1").unwrap().result.unwrap(), 52_000.0);
    }
}
