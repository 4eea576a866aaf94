//! Bond trade file loader.
//!
//! Wire format: comma-separated records with one header line, fields in
//! order `[tradeType, tradeDate, instrument, counterparty, notional, rate,
//! tradeId]`. An unrecognised trade type tag falls back to `CorpBond`;
//! this matches the documented upstream feed behaviour and is logged so
//! the fallback is observable.

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;

use risk_core::types::{Trade, TradeType};

use crate::error::LoadError;
use crate::{MalformedRecordPolicy, TradeLoader, TradeRecords};

const BOND_FIELD_COUNT: usize = 7;

/// Loads bond trades from a comma-separated file.
pub struct BondTradeLoader {
    path: PathBuf,
    policy: MalformedRecordPolicy,
}

impl BondTradeLoader {
    /// Create a loader for `path` with the default malformed-record policy
    /// ([`MalformedRecordPolicy::Fail`]; the bond feed has no per-line
    /// recovery contract).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: MalformedRecordPolicy::default(),
        }
    }

    /// Override the malformed-record policy.
    pub fn with_policy(mut self, policy: MalformedRecordPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl TradeLoader for BondTradeLoader {
    fn load_trades(&self) -> Result<TradeRecords, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;

        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        Ok(Box::new(BondTradeIter {
            records: reader.into_records(),
            policy: self.policy,
        }))
    }
}

struct BondTradeIter {
    records: csv::StringRecordsIntoIter<File>,
    policy: MalformedRecordPolicy,
}

impl Iterator for BondTradeIter {
    type Item = Result<Trade, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.records.next()?;
            match parse_bond_record(record) {
                Ok(trade) => return Some(Ok(trade)),
                Err(err) => match self.policy {
                    MalformedRecordPolicy::Fail => return Some(Err(err)),
                    MalformedRecordPolicy::SkipAndLog => {
                        warn!(error = %err, "skipping malformed bond trade record");
                    }
                },
            }
        }
    }
}

fn parse_bond_record(
    record: Result<csv::StringRecord, csv::Error>,
) -> Result<Trade, LoadError> {
    let record = record.map_err(|err| LoadError::MalformedRecord {
        line: err.position().map(|p| p.line()).unwrap_or(0),
        reason: err.to_string(),
    })?;
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != BOND_FIELD_COUNT {
        return Err(LoadError::MalformedRecord {
            line,
            reason: format!(
                "expected {BOND_FIELD_COUNT} fields, found {}",
                record.len()
            ),
        });
    }

    let malformed = |reason: String| LoadError::MalformedRecord { line, reason };

    let trade_type = match &record[0] {
        "GovBond" => TradeType::GovBond,
        "CorpBond" => TradeType::CorpBond,
        other => {
            warn!(
                trade_type = other,
                line, "unrecognised bond trade type tag, defaulting to CorpBond"
            );
            TradeType::CorpBond
        }
    };

    let trade_date: NaiveDate = record[1]
        .parse()
        .map_err(|_| malformed(format!("invalid trade date '{}'", &record[1])))?;
    let notional: f64 = record[4]
        .parse()
        .map_err(|_| malformed(format!("invalid notional '{}'", &record[4])))?;
    let rate: f64 = record[5]
        .parse()
        .map_err(|_| malformed(format!("invalid rate '{}'", &record[5])))?;

    Trade::bond(
        &record[6],
        trade_type,
        trade_date,
        &record[2],
        &record[3],
        notional,
        rate,
    )
    .map_err(|err| malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(fields: &[&str]) -> Result<csv::StringRecord, csv::Error> {
        Ok(csv::StringRecord::from(fields.to_vec()))
    }

    #[test]
    fn test_parse_corp_bond_record() {
        let trade = parse_bond_record(record(&[
            "CorpBond",
            "2023-01-01",
            "BOND123",
            "ACME",
            "1000000",
            "0.05",
            "TR1",
        ]))
        .unwrap();

        assert_eq!(trade.trade_id(), "TR1");
        assert_eq!(trade.trade_type(), TradeType::CorpBond);
        assert_eq!(trade.instrument(), "BOND123");
        assert_eq!(trade.counterparty(), "ACME");
        assert_relative_eq!(trade.notional(), 1_000_000.0);
        assert_relative_eq!(trade.rate(), 0.05);
        assert!(trade.value_date().is_none());
    }

    #[test]
    fn test_unrecognised_tag_falls_back_to_corp_bond() {
        let trade = parse_bond_record(record(&[
            "MuniBond",
            "2023-01-01",
            "BOND9",
            "ACME",
            "500",
            "0.03",
            "TR2",
        ]))
        .unwrap();
        assert_eq!(trade.trade_type(), TradeType::CorpBond);
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        let err = parse_bond_record(record(&["GovBond", "2023-01-01", "GILT", "TR3"]))
            .unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { .. }));
    }

    #[test]
    fn test_unparsable_notional_is_malformed() {
        let err = parse_bond_record(record(&[
            "GovBond",
            "2023-01-01",
            "GILT",
            "ACME",
            "lots",
            "0.04",
            "TR4",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("invalid notional"));
    }
}
