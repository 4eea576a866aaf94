//! # Risk Pricing
//!
//! The concurrent trade-pricing dispatcher:
//!
//! - [`catalog::EngineCatalog`]: compile-time registry of named engine
//!   factory functions
//! - [`registry::EngineRegistry`]: trade type → engine resolution, built
//!   once per run from configuration bindings
//! - [`dispatch::SerialDispatcher`]: deterministic single-threaded strategy
//! - [`dispatch::ParallelDispatcher`]: bounded worker pool draining a
//!   pre-populated queue through a synchronised result sink
//! - [`engines`]: built-in bond and FX pricing engines
//!
//! Both dispatch strategies apply the same per-trade policy: trades whose
//! type has no registered engine receive a per-trade error outcome and the
//! run continues; duplicate outcome writes are fatal and abort the run.

pub mod catalog;
pub mod dispatch;
pub mod engines;
pub mod error;
pub mod registry;

pub use catalog::{EngineCatalog, EngineFactory};
pub use dispatch::{ParallelDispatcher, SerialDispatcher, TradeDispatcher, TradeStream};
pub use error::{DispatchError, RegistryError};
pub use registry::{EngineBinding, EngineRegistry};
