//! Property-based testing strategies for engine inputs.
//!
//! Generators draw material names from a shared pool with deliberate
//! casing variants, so generated catalogues exercise name normalization
//! and produce genuine grouping collisions. Quantities include the zero
//! edge the engine must treat as non-constraining.

use craft_core::catalog::{MaterialLine, MaterialType, Recipe, RecipeId};
use craft_core::inventory::InventoryEntry;
use proptest::prelude::*;

/// Material name pool. Several entries are casing or whitespace variants
/// of the same nominal material.
const MATERIAL_NAMES: &[&str] = &[
    "Earthroot Herb",
    "earthroot herb",
    "Glass Vial",
    "Iron Ore",
    "IRON ORE",
    "Crystal Shard",
    " Wild Honey",
    "Oak Plank",
    "Resin Glue",
    "Bone",
];

/// Generate one of the three material types.
pub fn arb_material_type() -> impl Strategy<Value = MaterialType> {
    prop_oneof![
        Just(MaterialType::Profession),
        Just(MaterialType::Drop),
        Just(MaterialType::Buy),
    ]
}

/// Generate a material name from the shared pool.
pub fn arb_material_name() -> impl Strategy<Value = String> {
    proptest::sample::select(MATERIAL_NAMES).prop_map(|name| name.to_string())
}

/// Generate a per-craft quantity.
///
/// Range: 0 to 5. Zero is included on purpose; such lines must never
/// constrain a craft count.
pub fn arb_line_quantity() -> impl Strategy<Value = u32> {
    0u32..6
}

/// Generate a material line for the given recipe.
///
/// Profession lines always carry price 0, matching the data invariant.
pub fn arb_material_line(recipe_id: u64) -> impl Strategy<Value = MaterialLine> {
    (
        arb_material_name(),
        arb_line_quantity(),
        arb_material_type(),
        0u32..50,
    )
        .prop_map(move |(name, quantity, material_type, price)| {
            let price = if material_type == MaterialType::Profession {
                0
            } else {
                price
            };
            MaterialLine::new(RecipeId::new(recipe_id), name, quantity, material_type, price)
        })
}

/// Generate a whole catalogue: recipes with ids 1..=n and their lines.
///
/// Output counts include 0 (the engine prices those as producing one),
/// and recipes may have no lines at all (unbounded feasibility).
pub fn arb_catalogue(
    max_recipes: usize,
) -> impl Strategy<Value = (Vec<Recipe>, Vec<MaterialLine>)> {
    let recipe_spec = (
        0u32..5,
        0u32..80,
        proptest::collection::vec(arb_material_line(0), 0..5),
    );

    proptest::collection::vec(recipe_spec, 0..max_recipes).prop_map(|specs| {
        let mut recipes = Vec::new();
        let mut lines = Vec::new();
        for (index, (produced, sell_price, recipe_lines)) in specs.into_iter().enumerate() {
            let id = RecipeId::new(index as u64 + 1);
            recipes.push(Recipe::new(
                id,
                format!("Recipe {}", index + 1),
                produced,
                sell_price,
            ));
            for mut line in recipe_lines {
                // Drawn against a placeholder id; stamp the real owner.
                line.recipe_id = id;
                lines.push(line);
            }
        }
        (recipes, lines)
    })
}

/// Generate inventory entries over the shared name pool.
pub fn arb_inventory_entries(max_entries: usize) -> impl Strategy<Value = Vec<InventoryEntry>> {
    proptest::collection::vec(
        (arb_material_name(), 0u64..40)
            .prop_map(|(name, quantity)| InventoryEntry::new(name, quantity)),
        0..max_entries,
    )
}
