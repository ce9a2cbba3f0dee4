//! # Craft Core
//!
//! Crafting-economy analysis engine for recipe catalogues. Given the
//! catalogue's recipes and material lines, it answers what is craftable
//! with a held inventory and at what scale, what crafting earns at NPC
//! reference prices, which recipes match a material-type profile, and
//! what the catalogue demands in aggregate.
//!
//! This crate contains **only** pure, deterministic analysis logic:
//!
//! - No storage access
//! - No IO
//! - No state between calls
//!
//! Every operation is a synchronous function over an immutable snapshot
//! (recipes plus material lines, optionally a caller inventory) and
//! returns plain serializable records. Calls are independent, so issuing
//! them concurrently over the same snapshot needs no locking.
//!
//! # Crate Structure
//!
//! - [`catalog`] - recipe and material data model, the [`catalog::Catalogue`] snapshot
//! - [`inventory`] - caller-held material inventories
//! - [`feasibility`] - craftable-now and shortfall analyses
//! - [`profit`] - NPC-price profitability ranking
//! - [`profile`] - material-type profile filtering
//! - [`usage`] - catalogue-wide material demand aggregation
//! - [`error`] - the engine's two caller-input error classes

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod error;
pub mod feasibility;
pub mod inventory;
pub mod profile;
pub mod profit;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub mod usage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{normalized, Catalogue, MaterialLine, MaterialType, Recipe, RecipeId};
    pub use crate::error::{EngineError, Result};
    pub use crate::feasibility::{
        analyze_potential_crafts, craftable_now, CraftAnalysis, CraftCount, CraftabilityReport,
        MaterialDemand, MaterialShortfall,
    };
    pub use crate::inventory::{Inventory, InventoryEntry};
    pub use crate::profile::{filter_by_material_profile, MatchProfile, TypeSelection};
    pub use crate::profit::{rank_by_profitability, ProfitReport};
    pub use crate::usage::{summarize_usage, UsageFilter, UsageSummary};
}
