//! Catalogue-wide profitability ranking at NPC reference prices.
//!
//! No inventory is involved: this is a reference calculation over the
//! catalogue, answering "what would one craft of each recipe earn if all
//! materials were bought at vendor price and all output sold at vendor
//! price". Negative profit is a reportable result, not an error.

use serde::{Deserialize, Serialize};

use crate::catalog::{lines_by_recipe, MaterialLine, MaterialType, Recipe, RecipeId};

/// Reference profit for one recipe at NPC prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Catalogue id of the recipe.
    pub recipe_id: RecipeId,
    /// Recipe name.
    pub recipe_name: String,
    /// Vendor revenue for one craft's output.
    pub total_revenue_npc: i64,
    /// Summed vendor cost of one craft's purchasable materials.
    pub total_material_cost_npc: i64,
    /// Revenue minus cost. Negative when crafting loses money.
    pub profit_npc: i64,
}

/// Vendor cost of one craft: sum of quantity * price over purchasable lines.
///
/// Profession materials have no purchase price and never contribute,
/// whatever their `default_npc_price` field claims.
fn material_cost(lines: &[&MaterialLine]) -> i64 {
    lines
        .iter()
        .filter(|line| line.material_type != MaterialType::Profession)
        .fold(0_i64, |cost, line| {
            cost.saturating_add(
                i64::from(line.quantity).saturating_mul(i64::from(line.default_npc_price)),
            )
        })
}

/// Rank every recipe by NPC-price profit, descending.
///
/// A zero output count is treated as producing one unit so single-unit
/// recipes recorded without a count are not priced at zero revenue.
/// Equal profits keep catalogue order (the sort is stable).
#[must_use]
pub fn rank_by_profitability(
    recipes: &[Recipe],
    material_lines: &[MaterialLine],
) -> Vec<ProfitReport> {
    let grouped = lines_by_recipe(material_lines);

    let mut reports: Vec<ProfitReport> = recipes
        .iter()
        .map(|recipe| {
            let lines = grouped.get(&recipe.id).map_or(&[][..], Vec::as_slice);
            let cost = material_cost(lines);

            let produced = i64::from(recipe.quantity_produced.max(1));
            let revenue = i64::from(recipe.npc_sell_price).saturating_mul(produced);

            ProfitReport {
                recipe_id: recipe.id,
                recipe_name: recipe.name.clone(),
                total_revenue_npc: revenue,
                total_material_cost_npc: cost,
                profit_npc: revenue.saturating_sub(cost),
            }
        })
        .collect();

    reports.sort_by(|a, b| b.profit_npc.cmp(&a.profit_npc));

    tracing::debug!(recipes = reports.len(), "Profitability ranking complete");

    reports
}
