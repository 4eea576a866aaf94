//! Trade entity and trade type tags.
//!
//! A [`Trade`] is a single tagged-union entity covering both the bond and FX
//! families, with family membership carried by [`TradeType`] and the FX-only
//! value date held as an optional field. Construction goes through the
//! family-specific constructors so the family invariants hold for the life
//! of the trade.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::error::TradeError;

/// Closed set of trade type tags understood by the pricing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeType {
    /// Government bond
    GovBond,
    /// Corporate bond
    CorpBond,
    /// FX spot
    FxSpot,
    /// FX forward
    FxFwd,
}

/// Trade family discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeFamily {
    /// Bond trades (GovBond, CorpBond)
    Bond,
    /// FX trades (FxSpot, FxFwd)
    Fx,
}

impl TradeType {
    /// The wire tag for this trade type, as it appears in trade files and
    /// engine configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GovBond => "GovBond",
            Self::CorpBond => "CorpBond",
            Self::FxSpot => "FxSpot",
            Self::FxFwd => "FxFwd",
        }
    }

    /// The family this trade type belongs to.
    pub fn family(&self) -> TradeFamily {
        match self {
            Self::GovBond | Self::CorpBond => TradeFamily::Bond,
            Self::FxSpot | Self::FxFwd => TradeFamily::Fx,
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GovBond" => Ok(Self::GovBond),
            "CorpBond" => Ok(Self::CorpBond),
            "FxSpot" => Ok(Self::FxSpot),
            "FxFwd" => Ok(Self::FxFwd),
            other => Err(TradeError::UnknownTradeType(other.to_string())),
        }
    }
}

/// A single financial trade record to be priced.
///
/// Immutable once constructed. The dispatcher only ever reads trades; they
/// are owned by whoever loaded them and handed to a pricing run by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    trade_id: String,
    trade_type: TradeType,
    trade_date: NaiveDate,
    instrument: String,
    counterparty: String,
    notional: f64,
    rate: f64,
    /// Settlement date, FX trades only
    value_date: Option<NaiveDate>,
}

impl Trade {
    /// Construct a bond trade.
    ///
    /// # Errors
    /// - [`TradeError::EmptyTradeId`] if `trade_id` is empty or whitespace
    /// - [`TradeError::WrongFamily`] if `trade_type` is not a bond type
    #[allow(clippy::too_many_arguments)]
    pub fn bond(
        trade_id: impl Into<String>,
        trade_type: TradeType,
        trade_date: NaiveDate,
        instrument: impl Into<String>,
        counterparty: impl Into<String>,
        notional: f64,
        rate: f64,
    ) -> Result<Self, TradeError> {
        Self::validated(
            trade_id.into(),
            trade_type,
            TradeFamily::Bond,
            "bond",
            trade_date,
            instrument.into(),
            counterparty.into(),
            notional,
            rate,
            None,
        )
    }

    /// Construct an FX trade. FX trades always carry a value date.
    ///
    /// # Errors
    /// - [`TradeError::EmptyTradeId`] if `trade_id` is empty or whitespace
    /// - [`TradeError::WrongFamily`] if `trade_type` is not an FX type
    #[allow(clippy::too_many_arguments)]
    pub fn fx(
        trade_id: impl Into<String>,
        trade_type: TradeType,
        trade_date: NaiveDate,
        instrument: impl Into<String>,
        counterparty: impl Into<String>,
        notional: f64,
        rate: f64,
        value_date: NaiveDate,
    ) -> Result<Self, TradeError> {
        Self::validated(
            trade_id.into(),
            trade_type,
            TradeFamily::Fx,
            "FX",
            trade_date,
            instrument.into(),
            counterparty.into(),
            notional,
            rate,
            Some(value_date),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn validated(
        trade_id: String,
        trade_type: TradeType,
        expected_family: TradeFamily,
        family_name: &'static str,
        trade_date: NaiveDate,
        instrument: String,
        counterparty: String,
        notional: f64,
        rate: f64,
        value_date: Option<NaiveDate>,
    ) -> Result<Self, TradeError> {
        if trade_id.trim().is_empty() {
            return Err(TradeError::EmptyTradeId);
        }

        if trade_type.family() != expected_family {
            return Err(TradeError::WrongFamily {
                trade_type: trade_type.to_string(),
                family: family_name,
            });
        }

        Ok(Self {
            trade_id,
            trade_type,
            trade_date,
            instrument,
            counterparty,
            notional,
            rate,
            value_date,
        })
    }

    /// Trade identifier, unique within a pricing run.
    pub fn trade_id(&self) -> &str {
        &self.trade_id
    }

    /// Trade type tag.
    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    /// Trade (booking) date.
    pub fn trade_date(&self) -> NaiveDate {
        self.trade_date
    }

    /// Instrument identifier. For FX trades this is the currency pair.
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// Counterparty name.
    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    /// Trade notional.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Trade rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Value (settlement) date. Present for FX trades only.
    pub fn value_date(&self) -> Option<NaiveDate> {
        self.value_date
    }
}
