//! Implementations behind the CLI subcommands.
//!
//! Each command loads its inputs, runs one engine operation and renders
//! the report as pretty JSON for the binary to print. Keeping the logic
//! out of `main.rs` lets the data tests drive every command end to end.

use std::path::Path;

use thiserror::Error;

use craft_core::catalog::{Catalogue, MaterialType};
use craft_core::error::EngineError;
use craft_core::inventory::Inventory;
use craft_core::profile::{MatchProfile, TypeSelection};
use craft_core::usage::UsageFilter;

use crate::files::{CatalogueFile, DataFileError, InventoryFile};
use crate::validate::{validate_file, ValidationError};

/// Everything a tool run can fail with.
#[derive(Error, Debug)]
pub enum ToolError {
    /// A data file could not be loaded.
    #[error(transparent)]
    File(#[from] DataFileError),
    /// The catalogue failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The engine rejected the caller input.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// A material-type token outside the known three.
    #[error("unknown material type '{0}' (expected profession, drop or buy)")]
    UnknownMaterialType(String),
    /// The report could not be serialized.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

fn load_snapshot(path: &Path) -> Result<Catalogue, ToolError> {
    let snapshot = CatalogueFile::load(path)?.into_catalogue();
    tracing::info!(
        path = %path.display(),
        recipes = snapshot.recipe_count(),
        "Catalogue loaded"
    );
    Ok(snapshot)
}

fn load_inventory(path: &Path) -> Result<Inventory, ToolError> {
    let file = InventoryFile::load(path)?;
    let inventory = Inventory::from_entries(&file.entries)?;
    tracing::info!(
        path = %path.display(),
        materials = inventory.len(),
        "Inventory loaded"
    );
    Ok(inventory)
}

fn render<T: serde::Serialize>(value: &T) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Validate a catalogue data file.
pub fn cmd_validate(path: &Path) -> Result<(), ToolError> {
    tracing::info!(path = %path.display(), "Validating catalogue");
    validate_file(path)?;
    tracing::info!("Validation passed");
    Ok(())
}

/// Render the craftable-now report for an inventory.
pub fn cmd_craftable(catalogue: &Path, inventory: &Path) -> Result<String, ToolError> {
    let snapshot = load_snapshot(catalogue)?;
    let held = load_inventory(inventory)?;

    let reports = snapshot.craftable_now(&held);
    tracing::info!(craftable = reports.len(), "Craftable-now report ready");
    render(&reports)
}

/// Render the potential-craft analysis for an inventory.
pub fn cmd_analyze(catalogue: &Path, inventory: &Path) -> Result<String, ToolError> {
    let snapshot = load_snapshot(catalogue)?;
    let held = load_inventory(inventory)?;

    let analyses = snapshot.analyze_potential_crafts(&held);
    tracing::info!(analyzed = analyses.len(), "Potential-craft report ready");
    render(&analyses)
}

/// Render the catalogue-wide profitability ranking.
pub fn cmd_profit(catalogue: &Path) -> Result<String, ToolError> {
    let snapshot = load_snapshot(catalogue)?;

    let reports = snapshot.rank_by_profitability();
    tracing::info!(ranked = reports.len(), "Profitability report ready");
    render(&reports)
}

/// Render the recipes matching a material-type profile.
pub fn cmd_profile(
    catalogue: &Path,
    types: &[String],
    match_profile: &str,
) -> Result<String, ToolError> {
    let snapshot = load_snapshot(catalogue)?;

    let selection = TypeSelection::parse(types)?;
    let match_profile: MatchProfile = match_profile.parse()?;

    let recipes = snapshot.filter_by_material_profile(&selection, match_profile);
    tracing::info!(matched = recipes.len(), "Profile report ready");
    render(&recipes)
}

/// Render the aggregated material-usage summary.
pub fn cmd_usage(
    catalogue: &Path,
    name: Option<String>,
    types: &[String],
) -> Result<String, ToolError> {
    let snapshot = load_snapshot(catalogue)?;

    let mut filter = UsageFilter::all();
    if let Some(name) = name {
        filter = filter.with_name(name);
    }
    if !types.is_empty() {
        let parsed: Vec<MaterialType> = types
            .iter()
            .map(|token| {
                MaterialType::parse_token(token)
                    .ok_or_else(|| ToolError::UnknownMaterialType(token.clone()))
            })
            .collect::<Result<_, _>>()?;
        filter = filter.with_types(parsed);
    }

    let summaries = snapshot.summarize_usage(&filter);
    tracing::info!(groups = summaries.len(), "Usage report ready");
    render(&summaries)
}
