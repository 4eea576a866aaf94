//! FX trade file loader.
//!
//! Wire format: records separated by the `¬` character with two header
//! lines, fields in order `[tradeType, tradeDate, ccy1, ccy2, notional,
//! rate, valueDate, counterparty, tradeId]`. The instrument is the
//! concatenation of the two currencies. The separator is not ASCII, so
//! records are split per line rather than handed to a CSV reader.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::warn;

use risk_core::types::{Trade, TradeType};

use crate::error::LoadError;
use crate::{MalformedRecordPolicy, TradeLoader, TradeRecords};

const FX_SEPARATOR: char = '¬';
const FX_FIELD_COUNT: usize = 9;
const FX_HEADER_LINES: u64 = 2;

/// Loads FX trades from a `¬`-separated file.
pub struct FxTradeLoader {
    path: PathBuf,
    policy: MalformedRecordPolicy,
}

impl FxTradeLoader {
    /// Create a loader for `path` with the FX feed's contractual
    /// malformed-record policy: skip the record, log, and do not yield it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: MalformedRecordPolicy::SkipAndLog,
        }
    }

    /// Override the malformed-record policy.
    pub fn with_policy(mut self, policy: MalformedRecordPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl TradeLoader for FxTradeLoader {
    fn load_trades(&self) -> Result<TradeRecords, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;

        Ok(Box::new(FxTradeIter {
            lines: BufReader::new(file).lines(),
            line: 0,
            policy: self.policy,
        }))
    }
}

struct FxTradeIter {
    lines: Lines<BufReader<File>>,
    line: u64,
    policy: MalformedRecordPolicy,
}

impl Iterator for FxTradeIter {
    type Item = Result<Trade, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(LoadError::Io(err))),
            };
            self.line += 1;

            if self.line <= FX_HEADER_LINES {
                continue;
            }

            match parse_fx_line(&line, self.line) {
                Ok(trade) => return Some(Ok(trade)),
                Err(err) => match self.policy {
                    MalformedRecordPolicy::Fail => return Some(Err(err)),
                    MalformedRecordPolicy::SkipAndLog => {
                        warn!(error = %err, "skipping malformed FX trade record");
                    }
                },
            }
        }
    }
}

fn parse_fx_line(line: &str, line_number: u64) -> Result<Trade, LoadError> {
    let malformed = |reason: String| LoadError::MalformedRecord {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.split(FX_SEPARATOR).collect();
    if fields.len() != FX_FIELD_COUNT {
        return Err(malformed(format!(
            "invalid number of fields in trade data: expected {FX_FIELD_COUNT}, found {}",
            fields.len()
        )));
    }

    let trade_type = match fields[0] {
        "FxSpot" => TradeType::FxSpot,
        "FxFwd" => TradeType::FxFwd,
        other => {
            warn!(
                trade_type = other,
                line = line_number,
                "unrecognised FX trade type tag, defaulting to FxFwd"
            );
            TradeType::FxFwd
        }
    };

    let trade_date: NaiveDate = fields[1]
        .parse()
        .map_err(|_| malformed(format!("invalid trade date '{}'", fields[1])))?;
    let notional: f64 = fields[4]
        .parse()
        .map_err(|_| malformed(format!("invalid notional '{}'", fields[4])))?;
    let rate: f64 = fields[5]
        .parse()
        .map_err(|_| malformed(format!("invalid rate '{}'", fields[5])))?;
    let value_date: NaiveDate = fields[6]
        .parse()
        .map_err(|_| malformed(format!("invalid value date '{}'", fields[6])))?;

    let instrument = format!("{}{}", fields[2], fields[3]);

    Trade::fx(
        fields[8],
        trade_type,
        trade_date,
        instrument,
        fields[7],
        notional,
        rate,
        value_date,
    )
    .map_err(|err| malformed(err.to_string()))
}
