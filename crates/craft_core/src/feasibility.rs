//! Feasibility analysis: how many times each recipe can be crafted.
//!
//! Two views over the same counting kernel:
//!
//! - [`craftable_now`] keeps only the recipes the caller can craft at
//!   least once, with the per-material demand at that scale.
//! - [`analyze_potential_crafts`] keeps non-craftable recipes in and adds
//!   a per-material shortfall, so a caller can see how far from
//!   craftability they are rather than a bare yes/no.
//!
//! Craft counts are exact integer math. The binding material is the
//! minimum over floor(held / required); a line that consumes nothing can
//! never run out and is excluded from the minimum, never used as a
//! divisor. A recipe with no consuming line at all is [`CraftCount::Unbounded`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::{lines_by_recipe, MaterialLine, Recipe, RecipeId};
use crate::inventory::Inventory;

/// Number of possible craft repetitions for one recipe.
///
/// `Unbounded` replaces the floating-point infinity the problem invites:
/// it round-trips through any serializer and its ordering is total.
/// `Bounded(0)` is a valid value, it just never appears in craftable-now
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CraftCount {
    /// Craftable exactly this many times.
    Bounded(u64),
    /// No material line constrains this recipe.
    Unbounded,
}

impl CraftCount {
    /// Whether at least one craft is possible.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        match self {
            Self::Bounded(n) => n > 0,
            Self::Unbounded => true,
        }
    }

    /// The finite count, `None` when unbounded.
    #[must_use]
    pub const fn bounded(self) -> Option<u64> {
        match self {
            Self::Bounded(n) => Some(n),
            Self::Unbounded => None,
        }
    }

    /// Whether no material line constrains the recipe.
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl Ord for CraftCount {
    /// Total order with `Unbounded` above every finite count.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Unbounded, Self::Unbounded) => Ordering::Equal,
            (Self::Unbounded, Self::Bounded(_)) => Ordering::Greater,
            (Self::Bounded(_), Self::Unbounded) => Ordering::Less,
            (Self::Bounded(a), Self::Bounded(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for CraftCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Demand for one material at the reported craft scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDemand {
    /// Material name as recorded in the catalogue.
    pub material_name: String,
    /// Quantity one craft consumes.
    pub required_per_craft: u32,
    /// Quantity consumed at the reported craft count. Zero for unbounded
    /// recipes, which by definition consume nothing.
    pub total_required: u64,
    /// Quantity the caller holds.
    pub quantity_held: u64,
}

/// Feasibility report for one craftable recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftabilityReport {
    /// Catalogue id of the recipe.
    pub recipe_id: RecipeId,
    /// Recipe name.
    pub recipe_name: String,
    /// Output units per single craft.
    pub quantity_produced_per_craft: u32,
    /// Maximum craft repetitions under the given inventory.
    pub max_crafts: CraftCount,
    /// Total output units at `max_crafts`; `None` when unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    /// Per-material demand at `max_crafts`, in catalogue line order.
    pub materials: Vec<MaterialDemand>,
}

/// Demand plus shortfall for one material line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialShortfall {
    /// Material name as recorded in the catalogue.
    pub material_name: String,
    /// Quantity one craft consumes.
    pub required_per_craft: u32,
    /// Quantity consumed at the reported craft count.
    pub total_required: u64,
    /// Quantity the caller holds.
    pub quantity_held: u64,
    /// Units missing before a single craft is possible; 0 when covered.
    pub missing_for_one_craft: u64,
}

/// Potential-craft analysis for one recipe, shortfalls included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftAnalysis {
    /// Catalogue id of the recipe.
    pub recipe_id: RecipeId,
    /// Recipe name.
    pub recipe_name: String,
    /// Output units per single craft.
    pub quantity_produced_per_craft: u32,
    /// Maximum craft repetitions under the given inventory. `Bounded(0)`
    /// is reported here, unlike in craftable-now output.
    pub max_crafts: CraftCount,
    /// Total output units at `max_crafts`; `None` when unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    /// Per-material demand and shortfall, in catalogue line order.
    pub materials: Vec<MaterialShortfall>,
}

/// Maximum craft count for one recipe's lines under an inventory.
///
/// Zero-quantity lines never participate: 0 consumption cannot run out,
/// and dividing by it would be nonsense anyway. With no participating
/// line left the recipe is unbounded.
fn max_crafts(lines: &[&MaterialLine], inventory: &Inventory) -> CraftCount {
    let mut binding: Option<u64> = None;

    for line in lines {
        if line.quantity == 0 {
            continue;
        }
        let held = inventory.quantity_of(&line.material_name);
        let crafts = held / u64::from(line.quantity);
        binding = Some(binding.map_or(crafts, |current| current.min(crafts)));
    }

    match binding {
        Some(crafts) => CraftCount::Bounded(crafts),
        None => CraftCount::Unbounded,
    }
}

/// Quantity a material line consumes at a given craft count.
fn consumed_at(required_per_craft: u32, crafts: CraftCount) -> u64 {
    match crafts {
        CraftCount::Bounded(n) => u64::from(required_per_craft).saturating_mul(n),
        // Unbounded means no line consumes anything.
        CraftCount::Unbounded => 0,
    }
}

/// Total output units at a craft count, `None` when unbounded.
fn items_produced(quantity_produced: u32, crafts: CraftCount) -> Option<u64> {
    crafts
        .bounded()
        .map(|n| n.saturating_mul(u64::from(quantity_produced)))
}

/// Descending craft count, then recipe name ascending.
fn by_crafts_then_name(a: &CraftCount, a_name: &str, b: &CraftCount, b_name: &str) -> Ordering {
    b.cmp(a).then_with(|| a_name.cmp(b_name))
}

/// Recipes craftable at least once with the given inventory.
///
/// Recipes whose count comes out at zero are excluded, not reported as
/// zero. Unbounded recipes sort above every finite count; ties break by
/// recipe name ascending.
#[must_use]
pub fn craftable_now(
    recipes: &[Recipe],
    material_lines: &[MaterialLine],
    inventory: &Inventory,
) -> Vec<CraftabilityReport> {
    let grouped = lines_by_recipe(material_lines);
    let mut reports = Vec::new();

    for recipe in recipes {
        let lines = grouped.get(&recipe.id).map_or(&[][..], Vec::as_slice);
        let crafts = max_crafts(lines, inventory);
        if !crafts.is_positive() {
            continue;
        }

        let materials = lines
            .iter()
            .map(|line| MaterialDemand {
                material_name: line.material_name.clone(),
                required_per_craft: line.quantity,
                total_required: consumed_at(line.quantity, crafts),
                quantity_held: inventory.quantity_of(&line.material_name),
            })
            .collect();

        reports.push(CraftabilityReport {
            recipe_id: recipe.id,
            recipe_name: recipe.name.clone(),
            quantity_produced_per_craft: recipe.quantity_produced,
            max_crafts: crafts,
            total_items: items_produced(recipe.quantity_produced, crafts),
            materials,
        });
    }

    reports.sort_by(|a, b| {
        by_crafts_then_name(&a.max_crafts, &a.recipe_name, &b.max_crafts, &b.recipe_name)
    });

    tracing::debug!(
        recipes = recipes.len(),
        craftable = reports.len(),
        "Craftable-now pass complete"
    );

    reports
}

/// Feasibility with shortfalls, non-craftable recipes included.
///
/// With a non-empty inventory, only recipes sharing at least one material
/// name with the inventory are analyzed; holding a material at quantity 0
/// still counts as sharing it. An empty inventory analyzes the whole
/// catalogue. Ordering matches [`craftable_now`].
#[must_use]
pub fn analyze_potential_crafts(
    recipes: &[Recipe],
    material_lines: &[MaterialLine],
    inventory: &Inventory,
) -> Vec<CraftAnalysis> {
    let grouped = lines_by_recipe(material_lines);
    let mut analyses = Vec::new();

    for recipe in recipes {
        let lines = grouped.get(&recipe.id).map_or(&[][..], Vec::as_slice);

        if !inventory.is_empty()
            && !lines
                .iter()
                .any(|line| inventory.mentions(&line.material_name))
        {
            continue;
        }

        let crafts = max_crafts(lines, inventory);
        let materials = lines
            .iter()
            .map(|line| {
                let held = inventory.quantity_of(&line.material_name);
                MaterialShortfall {
                    material_name: line.material_name.clone(),
                    required_per_craft: line.quantity,
                    total_required: consumed_at(line.quantity, crafts),
                    quantity_held: held,
                    missing_for_one_craft: u64::from(line.quantity).saturating_sub(held),
                }
            })
            .collect();

        analyses.push(CraftAnalysis {
            recipe_id: recipe.id,
            recipe_name: recipe.name.clone(),
            quantity_produced_per_craft: recipe.quantity_produced,
            max_crafts: crafts,
            total_items: items_produced(recipe.quantity_produced, crafts),
            materials,
        });
    }

    analyses.sort_by(|a, b| {
        by_crafts_then_name(&a.max_crafts, &a.recipe_name, &b.max_crafts, &b.recipe_name)
    });

    tracing::debug!(
        recipes = recipes.len(),
        analyzed = analyses.len(),
        "Potential-craft analysis complete"
    );

    analyses
}
