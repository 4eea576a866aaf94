//! Engine registry: trade type → pricing engine resolution.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use tracing::debug;

use risk_core::traits::PricingEngine;
use risk_core::types::TradeType;

use crate::catalog::EngineCatalog;
use crate::error::RegistryError;

/// One configuration binding of a trade type to an engine implementation.
///
/// All three fields are required; an empty field is a fatal configuration
/// error at registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineBinding {
    /// Trade type tag, e.g. `GovBond`
    pub trade_type: String,
    /// Implementation module reference, e.g. `engines::bond`
    pub module: String,
    /// Implementation identifier within the module, e.g. `GovBondEngine`
    pub engine: String,
}

/// Resolves a trade type to its pricing engine.
///
/// Built once per pricing run from an ordered list of bindings. Every
/// binding is resolved and constructed up front, so `resolve` never fails
/// for configuration reasons at runtime; it only returns `None` for trade
/// types that were never bound.
///
/// Read-only after construction and therefore safe to share across worker
/// threads without locking.
pub struct EngineRegistry {
    engines: HashMap<TradeType, Box<dyn PricingEngine>>,
}

impl EngineRegistry {
    /// Build a registry by resolving each binding against `catalog`.
    ///
    /// # Errors
    /// Any incomplete binding, unknown trade type, unknown engine
    /// reference, factory failure or duplicate trade-type binding aborts
    /// construction with the corresponding [`RegistryError`].
    pub fn from_bindings(
        bindings: &[EngineBinding],
        catalog: &EngineCatalog,
    ) -> Result<Self, RegistryError> {
        let mut engines: HashMap<TradeType, Box<dyn PricingEngine>> = HashMap::new();

        for binding in bindings {
            if binding.trade_type.trim().is_empty() {
                return Err(RegistryError::MissingTradeType);
            }

            if binding.module.trim().is_empty() || binding.engine.trim().is_empty() {
                return Err(RegistryError::MissingEngineReference {
                    trade_type: binding.trade_type.clone(),
                });
            }

            let trade_type: TradeType = binding
                .trade_type
                .parse()
                .map_err(|_| RegistryError::UnknownTradeType(binding.trade_type.clone()))?;

            if engines.contains_key(&trade_type) {
                return Err(RegistryError::DuplicateBinding(binding.trade_type.clone()));
            }

            let factory = catalog.lookup(&binding.module, &binding.engine).ok_or_else(|| {
                RegistryError::UnknownEngine {
                    module: binding.module.clone(),
                    engine: binding.engine.clone(),
                    trade_type: binding.trade_type.clone(),
                }
            })?;

            let engine = factory().map_err(|reason| RegistryError::Construction {
                trade_type: binding.trade_type.clone(),
                reason,
            })?;

            debug!(
                trade_type = %binding.trade_type,
                module = %binding.module,
                engine = %binding.engine,
                "registered pricing engine"
            );
            engines.insert(trade_type, engine);
        }

        Ok(Self { engines })
    }

    /// The engine bound to `trade_type`, or `None` if the type was never
    /// bound.
    pub fn resolve(&self, trade_type: TradeType) -> Option<&dyn PricingEngine> {
        self.engines.get(&trade_type).map(Box::as_ref)
    }

    /// Number of bound trade types.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// True iff no trade type is bound.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("trade_types", &self.engines.keys().collect::<Vec<_>>())
            .finish()
    }
}
