//! Core data types: trades, outcomes and their error types.

mod error;
mod results;
mod trade;

pub use error::{SinkError, TradeError};
pub use results::{ScalarResult, ScalarResults};
pub use trade::{Trade, TradeFamily, TradeType};
