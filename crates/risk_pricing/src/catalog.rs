//! Compile-time registry of named pricing engine factories.
//!
//! Engine bindings in configuration reference implementations by a module
//! path and an engine identifier. The catalog maps those two names onto a
//! factory function, making implementation lookup a plain map probe with an
//! explicit absent case instead of dynamic code loading.

use std::collections::HashMap;

use risk_core::traits::PricingEngine;

use crate::engines::{CorpBondEngine, FxForwardEngine, FxSpotEngine, GovBondEngine};

/// Factory for one pricing engine implementation.
///
/// Construction may fail; the failure reason is surfaced as a fatal
/// registry error naming the offending binding.
pub type EngineFactory = fn() -> Result<Box<dyn PricingEngine>, String>;

/// Named factory functions, keyed by `(module, engine)` reference pair.
#[derive(Default)]
pub struct EngineCatalog {
    factories: HashMap<(String, String), EngineFactory>,
}

impl EngineCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of built-in engines shipped with this crate.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register("engines::bond", "GovBondEngine", || {
            Ok(Box::new(GovBondEngine))
        });
        catalog.register("engines::bond", "CorpBondEngine", || {
            Ok(Box::new(CorpBondEngine))
        });
        catalog.register("engines::fx", "FxSpotEngine", || Ok(Box::new(FxSpotEngine)));
        catalog.register("engines::fx", "FxForwardEngine", || {
            Ok(Box::new(FxForwardEngine))
        });
        catalog
    }

    /// Register a factory under a module reference and engine identifier.
    /// A later registration for the same pair replaces the earlier one.
    pub fn register(&mut self, module: &str, engine: &str, factory: EngineFactory) {
        self.factories
            .insert((module.to_string(), engine.to_string()), factory);
    }

    /// Look up the factory for a `(module, engine)` reference pair.
    pub fn lookup(&self, module: &str, engine: &str) -> Option<EngineFactory> {
        self.factories
            .get(&(module.to_string(), engine.to_string()))
            .copied()
    }

    /// Iterate over the registered `(module, engine)` reference pairs.
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.factories
            .keys()
            .map(|(module, engine)| (module.as_str(), engine.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_all_trade_types() {
        let catalog = EngineCatalog::builtin();
        assert!(catalog.lookup("engines::bond", "GovBondEngine").is_some());
        assert!(catalog.lookup("engines::bond", "CorpBondEngine").is_some());
        assert!(catalog.lookup("engines::fx", "FxSpotEngine").is_some());
        assert!(catalog.lookup("engines::fx", "FxForwardEngine").is_some());
    }

    #[test]
    fn test_lookup_misses_unknown_reference() {
        let catalog = EngineCatalog::builtin();
        assert!(catalog.lookup("engines::bond", "NoSuchEngine").is_none());
        assert!(catalog.lookup("engines::equity", "GovBondEngine").is_none());
    }

    #[test]
    fn test_register_replaces_existing_factory() {
        let mut catalog = EngineCatalog::new();
        catalog.register("m", "e", || Err("first".to_string()));
        catalog.register("m", "e", || Err("second".to_string()));

        let factory = catalog.lookup("m", "e").unwrap();
        assert_eq!(factory().map(|_| ()).unwrap_err(), "second");
    }
}
