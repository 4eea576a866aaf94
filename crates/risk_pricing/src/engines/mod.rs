//! Built-in pricing engine implementations.
//!
//! Deterministic reference engines for the bond and FX trade families.
//! Production deployments register their own implementations through
//! [`EngineCatalog::register`](crate::catalog::EngineCatalog::register).

mod bond;
mod fx;

pub use bond::{CorpBondEngine, GovBondEngine};
pub use fx::{FxForwardEngine, FxSpotEngine};
