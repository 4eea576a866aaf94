//! Engines command implementation
//!
//! Lists the `(module, engine)` references available in the built-in
//! catalog, in the form the pricing configuration file expects.

use risk_pricing::EngineCatalog;

use crate::Result;

/// Run the engines command
pub fn run() -> Result<()> {
    let catalog = EngineCatalog::builtin();

    let mut references: Vec<(String, String)> = catalog
        .references()
        .map(|(module, engine)| (module.to_string(), engine.to_string()))
        .collect();
    references.sort();

    println!("Built-in pricing engines:");
    for (module, engine) in references {
        println!("  {module} :: {engine}");
    }

    Ok(())
}
