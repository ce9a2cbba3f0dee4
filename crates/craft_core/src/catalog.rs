//! Recipe catalogue data model.
//!
//! Defines the records every analysis consumes: recipes, their material
//! lines, and the [`Catalogue`] snapshot a storage collaborator hands to
//! the engine. The engine never loads or persists these itself; it only
//! reads whatever snapshot it was given.
//!
//! Material names are free text and compared case-insensitively through
//! [`normalized`]. Recipe names are identity keys and stay case-sensitive.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::feasibility::{self, CraftAnalysis, CraftabilityReport};
use crate::inventory::Inventory;
use crate::profile::{self, MatchProfile, TypeSelection};
use crate::profit::{self, ProfitReport};
use crate::usage::{self, UsageFilter, UsageSummary};

/// Unique identifier for recipes.
///
/// Serializes as the bare integer in both JSON and RON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl RecipeId {
    /// Create a new recipe ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// How a material is acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    /// Produced with an in-game profession skill; never purchasable.
    Profession,
    /// Looted from the world.
    Drop,
    /// Purchased from an NPC vendor.
    Buy,
}

impl MaterialType {
    /// All material types, in declaration order.
    pub const ALL: [Self; 3] = [Self::Profession, Self::Drop, Self::Buy];

    /// Canonical lowercase token, as used on the wire and in profile matching.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profession => "profession",
            Self::Drop => "drop",
            Self::Buy => "buy",
        }
    }

    /// Parse a token case-insensitively.
    ///
    /// Returns `None` for anything outside the three known types. Profile
    /// selections deliberately do not go through this: they keep unknown
    /// tokens as opaque strings (see [`TypeSelection`]).
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        match normalized(token).as_str() {
            "profession" => Some(Self::Profession),
            "drop" => Some(Self::Drop),
            "buy" => Some(Self::Buy),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A craftable item definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalogue-assigned identifier.
    pub id: RecipeId,
    /// Unique display name. Identity key, so not case-folded.
    pub name: String,
    /// Output units per single craft.
    pub quantity_produced: u32,
    /// NPC vendor price per output unit.
    pub npc_sell_price: u32,
}

impl Recipe {
    /// Create a new recipe.
    #[must_use]
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        quantity_produced: u32,
        npc_sell_price: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity_produced,
            npc_sell_price,
        }
    }
}

/// One required input to a recipe.
///
/// A line belongs to exactly one recipe and shares its lifecycle: the
/// catalogue drops lines together with their recipe, so a line whose
/// `recipe_id` matches nothing is a data defect, not a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLine {
    /// The owning recipe.
    pub recipe_id: RecipeId,
    /// Material name, compared case-insensitively everywhere.
    pub material_name: String,
    /// Quantity consumed per single craft of the owning recipe.
    pub quantity: u32,
    /// How the material is acquired.
    pub material_type: MaterialType,
    /// NPC purchase price per unit. Always 0 for profession materials.
    pub default_npc_price: u32,
}

impl MaterialLine {
    /// Create a new material line.
    #[must_use]
    pub fn new(
        recipe_id: RecipeId,
        material_name: impl Into<String>,
        quantity: u32,
        material_type: MaterialType,
        default_npc_price: u32,
    ) -> Self {
        Self {
            recipe_id,
            material_name: material_name.into(),
            quantity,
            material_type,
            default_npc_price,
        }
    }
}

/// Normalize a name or type token for comparison.
///
/// The engine's single casing rule: trim, then Unicode lowercase. Every
/// case-insensitive comparison routes through here so inventory lookups,
/// usage grouping and profile parsing cannot drift apart.
#[must_use]
pub fn normalized(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Group material lines by owning recipe, preserving line order.
///
/// Built once per analysis pass. Recipes with no lines simply have no
/// entry; callers treat a missing entry as an empty slice.
pub(crate) fn lines_by_recipe(materials: &[MaterialLine]) -> HashMap<RecipeId, Vec<&MaterialLine>> {
    let mut grouped: HashMap<RecipeId, Vec<&MaterialLine>> = HashMap::new();
    for line in materials {
        grouped.entry(line.recipe_id).or_default().push(line);
    }
    grouped
}

/// An immutable snapshot of the recipe catalogue.
///
/// Bundles the two flat lists a storage collaborator produces ("all
/// recipes", "all material lines") and exposes each analysis as a method.
/// The snapshot never changes after construction, so concurrent analyses
/// over the same snapshot need no locking. Each method delegates to the
/// free function of the same name; both forms are supported API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    recipes: Vec<Recipe>,
    materials: Vec<MaterialLine>,
}

impl Catalogue {
    /// Create a snapshot from the two catalogue lists.
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, materials: Vec<MaterialLine>) -> Self {
        Self { recipes, materials }
    }

    /// All recipes, in catalogue order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All material lines, in catalogue order.
    #[must_use]
    pub fn material_lines(&self) -> &[MaterialLine] {
        &self.materials
    }

    /// Number of recipes in the snapshot.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the snapshot holds no recipes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes craftable at least once with `inventory`.
    ///
    /// See [`feasibility::craftable_now`].
    #[must_use]
    pub fn craftable_now(&self, inventory: &Inventory) -> Vec<CraftabilityReport> {
        feasibility::craftable_now(&self.recipes, &self.materials, inventory)
    }

    /// Feasibility with per-material shortfalls, non-craftable included.
    ///
    /// See [`feasibility::analyze_potential_crafts`].
    #[must_use]
    pub fn analyze_potential_crafts(&self, inventory: &Inventory) -> Vec<CraftAnalysis> {
        feasibility::analyze_potential_crafts(&self.recipes, &self.materials, inventory)
    }

    /// Every recipe ranked by NPC-price profit.
    ///
    /// See [`profit::rank_by_profitability`].
    #[must_use]
    pub fn rank_by_profitability(&self) -> Vec<ProfitReport> {
        profit::rank_by_profitability(&self.recipes, &self.materials)
    }

    /// Recipes whose material types match a selection under a profile.
    ///
    /// See [`profile::filter_by_material_profile`].
    #[must_use]
    pub fn filter_by_material_profile(
        &self,
        selection: &TypeSelection,
        match_profile: MatchProfile,
    ) -> Vec<Recipe> {
        profile::filter_by_material_profile(
            &self.recipes,
            &self.materials,
            selection,
            match_profile,
        )
    }

    /// Aggregated material demand across the catalogue.
    ///
    /// See [`usage::summarize_usage`].
    #[must_use]
    pub fn summarize_usage(&self, filter: &UsageFilter) -> Vec<UsageSummary> {
        usage::summarize_usage(&self.materials, filter)
    }
}
