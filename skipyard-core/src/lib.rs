//! Core types and service wiring for the skipyard skip hire browser.

/// Comparison tray and pending selection state.
pub mod comparison;
/// Enrichment of raw skip records with reference data, tags, and images.
pub mod enrich;
/// Domain models shared by sources, the service, and clients.
pub mod model;
/// Traits describing the upstream skip source.
pub mod ports;
/// VAT arithmetic used by the detail views.
pub mod pricing;
/// Static catalogue of skip dimensions keyed by size.
pub mod reference;
/// Proportional image sizing for comparison views.
pub mod scaling;
/// High-level service facade used by clients.
pub mod service;
/// Size label tiers and the size guide.
pub mod tier;

pub use comparison::*;
pub use enrich::*;
pub use model::*;
pub use ports::*;
pub use pricing::*;
pub use reference::*;
pub use scaling::*;
pub use service::*;
pub use tier::*;

#[cfg(test)]
mod fixtures;
