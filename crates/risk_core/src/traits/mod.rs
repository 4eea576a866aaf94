//! Capability traits at the pricing seams.

mod engine;
mod sink;

pub use engine::PricingEngine;
pub use sink::ScalarResultSink;
