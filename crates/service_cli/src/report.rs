//! Result presentation.

use std::io::{self, Write};

use risk_core::types::{ScalarResult, ScalarResults};

/// Write one line per trade outcome to `out`, sorted by trade id:
///
/// ```text
/// TradeId : Result : Error
/// ```
///
/// The result segment is omitted when no result was recorded, and the
/// error segment when no error was recorded.
pub fn write_results<W: Write>(out: &mut W, results: &ScalarResults) -> io::Result<()> {
    let mut outcomes: Vec<ScalarResult> = results.iter().collect();
    outcomes.sort_by(|a, b| a.trade_id.cmp(&b.trade_id));

    for outcome in outcomes {
        write!(out, "{}", outcome.trade_id)?;
        if let Some(result) = outcome.result {
            write!(out, " : {result}")?;
        }
        if let Some(error) = &outcome.error {
            write!(out, " : {error}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}
