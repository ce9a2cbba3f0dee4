//! Material usage aggregation across the catalogue.
//!
//! Answers "what does the whole catalogue ask for": every material line
//! is grouped by (normalized name, type), demand is summed and distinct
//! consuming recipes are counted. The optional filters narrow the lines
//! before grouping, they never change how a group is computed.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{normalized, MaterialLine, MaterialType, RecipeId};

/// Optional narrowing for [`summarize_usage`].
///
/// Built with [`UsageFilter::all`] plus the `with_*` methods. The default
/// filter admits every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageFilter {
    name: Option<String>,
    types: Option<Vec<MaterialType>>,
}

impl UsageFilter {
    /// Admit every material line.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Narrow to one material name, compared case-insensitively.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(normalized(&name.into()));
        self
    }

    /// Narrow to lines of the given types.
    #[must_use]
    pub fn with_types(mut self, types: impl Into<Vec<MaterialType>>) -> Self {
        self.types = Some(types.into());
        self
    }

    fn admits(&self, line: &MaterialLine) -> bool {
        if let Some(name) = &self.name {
            if normalized(&line.material_name) != *name {
                return false;
            }
        }
        if let Some(types) = &self.types {
            if !types.contains(&line.material_type) {
                return false;
            }
        }
        true
    }

    /// Reference prices are only attached when the caller asked about one
    /// specific material.
    fn narrows_to_name(&self) -> bool {
        self.name.is_some()
    }
}

/// Aggregated demand for one (material name, type) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Material name in the casing of the first line seen for the group.
    pub material_name: String,
    /// Acquisition type of the group.
    pub material_type: MaterialType,
    /// Sum of per-craft quantities over every line in the group.
    pub total_quantity_needed: u64,
    /// Distinct recipes consuming this material.
    pub used_in_recipes_count: u32,
    /// Highest `default_npc_price` seen among purchasable lines of the
    /// group. Best-effort: prices vary across recipes for the same
    /// nominal material, so this is a shopping hint, not a quote. Only
    /// attached when the summary was narrowed to a single material name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_npc_price: Option<u32>,
}

#[derive(Debug, Default)]
struct GroupAccumulator {
    display_name: String,
    total_quantity: u64,
    recipes: HashSet<RecipeId>,
    max_price: Option<u32>,
}

/// Aggregate material demand across the catalogue.
///
/// Grouping is by (normalized name, type): the same name under two types
/// forms two groups, and casing variants of one name collapse into one.
/// Sorting surfaces the widest-demanded materials first: recipe count
/// descending, total quantity descending, then name, then type.
#[must_use]
pub fn summarize_usage(
    material_lines: &[MaterialLine],
    filter: &UsageFilter,
) -> Vec<UsageSummary> {
    let mut groups: HashMap<(String, MaterialType), GroupAccumulator> = HashMap::new();

    for line in material_lines {
        if !filter.admits(line) {
            continue;
        }

        let key = (normalized(&line.material_name), line.material_type);
        let group = groups.entry(key).or_default();

        if group.display_name.is_empty() {
            group.display_name = line.material_name.clone();
        }
        group.total_quantity = group.total_quantity.saturating_add(u64::from(line.quantity));
        group.recipes.insert(line.recipe_id);
        if line.material_type != MaterialType::Profession {
            group.max_price = Some(
                group
                    .max_price
                    .map_or(line.default_npc_price, |price| price.max(line.default_npc_price)),
            );
        }
    }

    let attach_price = filter.narrows_to_name();
    let mut summaries: Vec<UsageSummary> = groups
        .into_iter()
        .map(|((_, material_type), group)| UsageSummary {
            material_name: group.display_name,
            material_type,
            total_quantity_needed: group.total_quantity,
            used_in_recipes_count: u32::try_from(group.recipes.len()).unwrap_or(u32::MAX),
            reference_npc_price: if attach_price { group.max_price } else { None },
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.used_in_recipes_count
            .cmp(&a.used_in_recipes_count)
            .then_with(|| b.total_quantity_needed.cmp(&a.total_quantity_needed))
            .then_with(|| normalized(&a.material_name).cmp(&normalized(&b.material_name)))
            .then_with(|| a.material_type.cmp(&b.material_type))
    });

    tracing::debug!(
        lines = material_lines.len(),
        groups = summaries.len(),
        "Usage aggregation complete"
    );

    summaries
}
