//! Pricing engine configuration.
//!
//! A TOML file of `[[engine]]` tables, each binding one trade type to an
//! engine implementation:
//!
//! ```toml
//! [[engine]]
//! trade_type = "GovBond"
//! module = "engines::bond"
//! engine = "GovBondEngine"
//! ```
//!
//! All three fields are required; a missing field fails the parse.

use std::path::Path;

use serde::Deserialize;

use risk_pricing::EngineBinding;

use crate::{CliError, Result};

/// The parsed pricing engine configuration file.
#[derive(Debug, Deserialize)]
pub struct PricingConfig {
    /// Ordered engine bindings
    #[serde(rename = "engine", default)]
    pub engines: Vec<EngineBinding>,
}

impl PricingConfig {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            CliError::Config(format!("cannot read {}: {err}", path.display()))
        })?;

        toml::from_str(&content).map_err(|err| CliError::Config(err.to_string()))
    }
}
