//! Test fixtures and helpers.
//!
//! One-call builders for catalogue records, plus a small alchemy-themed
//! sample catalogue shared across the test suites.

use craft_core::catalog::{Catalogue, MaterialLine, MaterialType, Recipe, RecipeId};
use craft_core::inventory::{Inventory, InventoryEntry};

/// Build a recipe in one call.
#[must_use]
pub fn recipe(id: u64, name: &str, quantity_produced: u32, npc_sell_price: u32) -> Recipe {
    Recipe::new(RecipeId::new(id), name, quantity_produced, npc_sell_price)
}

/// Build a material line in one call.
#[must_use]
pub fn line(
    recipe_id: u64,
    material_name: &str,
    quantity: u32,
    material_type: MaterialType,
    default_npc_price: u32,
) -> MaterialLine {
    MaterialLine::new(
        RecipeId::new(recipe_id),
        material_name,
        quantity,
        material_type,
        default_npc_price,
    )
}

/// Build an inventory from (name, quantity) pairs.
///
/// # Panics
///
/// Panics when the pairs do not form a valid inventory.
#[must_use]
pub fn inventory(pairs: &[(&str, u64)]) -> Inventory {
    let entries: Vec<InventoryEntry> = pairs
        .iter()
        .map(|(name, quantity)| InventoryEntry::new(*name, *quantity))
        .collect();
    Inventory::from_entries(&entries).expect("fixture inventory entries are valid")
}

/// A small alchemy-flavoured catalogue covering every interesting shape:
/// multi-line recipes, a profession-only recipe, and a line-less one.
#[must_use]
pub fn alchemy_catalogue() -> Catalogue {
    let recipes = vec![
        recipe(1, "Minor Healing Potion", 2, 18),
        recipe(2, "Ironbark Shield", 1, 120),
        recipe(3, "Arcane Dust", 4, 5),
        recipe(4, "Molten Glass", 6, 2),
        recipe(5, "Campfire Kit", 1, 12),
    ];
    let lines = vec![
        line(1, "Earthroot Herb", 2, MaterialType::Drop, 3),
        line(1, "Glass Vial", 1, MaterialType::Buy, 4),
        line(2, "Ironbark Plank", 4, MaterialType::Drop, 10),
        line(2, "Iron Fitting", 2, MaterialType::Buy, 15),
        line(2, "Resin Glue", 1, MaterialType::Profession, 0),
        line(3, "Crystal Shard", 1, MaterialType::Drop, 2),
        line(4, "Quarry Sand", 3, MaterialType::Profession, 0),
        // Campfire Kit needs nothing.
    ];
    Catalogue::new(recipes, lines)
}
