//! Tests for the shipped sample data files.
//!
//! Verifies that the RON files parse, stay in sync with the embedded
//! samples, pass validation, and drive every analysis end to end.

use std::path::{Path, PathBuf};

use craft_core::prelude::*;
use craft_tools::commands::{self, ToolError};
use craft_tools::files::{CatalogueFile, InventoryFile};
use craft_tools::validate::validate_catalogue;

/// Locate a shipped data file whether tests run from the workspace root
/// or the crate directory.
fn data_path(file: &str) -> PathBuf {
    let candidates = [
        Path::new("assets/data").join(file),
        Path::new("crates/craft_tools/assets/data").join(file),
    ];

    for candidate in &candidates {
        if candidate.exists() {
            return candidate.clone();
        }
    }

    panic!("Could not find data file {file}. Tried: {candidates:?}");
}

fn shipped_catalogue() -> CatalogueFile {
    CatalogueFile::load(data_path("catalogue.ron")).expect("catalogue.ron loads")
}

fn shipped_inventory() -> Inventory {
    let file = InventoryFile::load(data_path("inventory.ron")).expect("inventory.ron loads");
    Inventory::from_entries(&file.entries).expect("inventory.ron entries are valid")
}

// ==========================================================================
// File/Sample Consistency
// ==========================================================================

#[test]
fn test_shipped_catalogue_matches_embedded_sample() {
    assert_eq!(shipped_catalogue(), CatalogueFile::sample());
}

#[test]
fn test_shipped_inventory_matches_embedded_sample() {
    let loaded = InventoryFile::load(data_path("inventory.ron")).unwrap();
    assert_eq!(loaded, InventoryFile::sample());
}

#[test]
fn test_shipped_catalogue_passes_validation() {
    assert!(validate_catalogue(&shipped_catalogue()).is_empty());
}

// ==========================================================================
// End-to-End Analyses Over the Sample Data
// ==========================================================================

#[test]
fn test_sample_inventory_crafts_the_expected_recipes() {
    let snapshot = shipped_catalogue().into_catalogue();
    let reports = snapshot.craftable_now(&shipped_inventory());

    let names: Vec<&str> = reports.iter().map(|r| r.recipe_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Campfire Kit",
            "Arcane Dust",
            "Minor Healing Potion",
            "Molten Glass",
        ]
    );

    assert!(reports[0].max_crafts.is_unbounded());
    assert_eq!(reports[1].max_crafts, CraftCount::Bounded(10));
    assert_eq!(reports[1].total_items, Some(40));
    assert_eq!(reports[2].max_crafts, CraftCount::Bounded(3));
}

#[test]
fn test_analysis_covers_near_misses_with_shortfalls() {
    let snapshot = shipped_catalogue().into_catalogue();
    let analyses = snapshot.analyze_potential_crafts(&shipped_inventory());

    let names: Vec<&str> = analyses.iter().map(|a| a.recipe_name.as_str()).collect();
    // Campfire Kit shares no material with the inventory, so it drops out.
    assert_eq!(
        names,
        vec![
            "Arcane Dust",
            "Minor Healing Potion",
            "Molten Glass",
            "Ironbark Shield",
            "Traveller's Bread",
        ]
    );

    let shield = &analyses[3];
    assert_eq!(shield.max_crafts, CraftCount::Bounded(0));
    let fitting = shield
        .materials
        .iter()
        .find(|m| m.material_name == "Iron Fitting")
        .unwrap();
    assert_eq!(fitting.missing_for_one_craft, 2);
}

#[test]
fn test_profit_ranking_over_the_sample_catalogue() {
    let snapshot = shipped_catalogue().into_catalogue();
    let reports = snapshot.rank_by_profitability();

    let ranked: Vec<(&str, i64)> = reports
        .iter()
        .map(|r| (r.recipe_name.as_str(), r.profit_npc))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Ironbark Shield", 50),
            ("Minor Healing Potion", 26),
            ("Traveller's Bread", 19),
            ("Arcane Dust", 18),
            ("Molten Glass", 12),
            ("Campfire Kit", 12),
        ]
    );
}

#[test]
fn test_profile_filters_over_the_sample_catalogue() {
    let snapshot = shipped_catalogue().into_catalogue();

    let drops_only = TypeSelection::parse(["drop"]).unwrap();
    let matched = snapshot.filter_by_material_profile(&drops_only, MatchProfile::Exclusive);
    let names: Vec<&str> = matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Arcane Dust"]);

    let no_buying = TypeSelection::parse(["buy"]).unwrap();
    let matched = snapshot.filter_by_material_profile(&no_buying, MatchProfile::NotContainsAny);
    let names: Vec<&str> = matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Arcane Dust", "Molten Glass", "Campfire Kit"]);
}

#[test]
fn test_usage_summary_over_the_sample_catalogue() {
    let snapshot = shipped_catalogue().into_catalogue();

    let summaries = snapshot.summarize_usage(&UsageFilter::all());
    assert_eq!(summaries.len(), 9);
    // Every material appears in exactly one recipe, so quantity decides.
    assert_eq!(summaries[0].material_name, "Ironbark Plank");
    assert_eq!(summaries[0].total_quantity_needed, 4);
    assert!(summaries.iter().all(|s| s.reference_npc_price.is_none()));

    let vial = snapshot.summarize_usage(&UsageFilter::all().with_name("glass vial"));
    assert_eq!(vial.len(), 1);
    assert_eq!(vial[0].used_in_recipes_count, 1);
    assert_eq!(vial[0].reference_npc_price, Some(4));
}

#[test]
fn test_reports_serialize_for_the_transport_layer() {
    let snapshot = shipped_catalogue().into_catalogue();
    let reports = snapshot.craftable_now(&shipped_inventory());

    let json = serde_json::to_string_pretty(&reports).unwrap();
    assert!(json.contains("\"unbounded\""));
    assert!(json.contains("\"bounded\": 10"));

    let parsed: Vec<CraftabilityReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, reports);
}

// ==========================================================================
// Command Layer
// ==========================================================================

#[test]
fn test_validate_command_accepts_the_shipped_catalogue() {
    commands::cmd_validate(&data_path("catalogue.ron")).expect("shipped catalogue is clean");
}

#[test]
fn test_craftable_command_renders_json_reports() {
    let json = commands::cmd_craftable(&data_path("catalogue.ron"), &data_path("inventory.ron"))
        .expect("command runs over the shipped data");

    let reports: Vec<CraftabilityReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].recipe_name, "Campfire Kit");
    assert!(reports[0].max_crafts.is_unbounded());
}

#[test]
fn test_analyze_and_profit_commands_render_json() {
    let json = commands::cmd_analyze(&data_path("catalogue.ron"), &data_path("inventory.ron"))
        .expect("analyze runs over the shipped data");
    let analyses: Vec<CraftAnalysis> = serde_json::from_str(&json).unwrap();
    assert_eq!(analyses.len(), 5);

    let json =
        commands::cmd_profit(&data_path("catalogue.ron")).expect("profit ranks the catalogue");
    let ranked: Vec<ProfitReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(ranked[0].recipe_name, "Ironbark Shield");
}

#[test]
fn test_profile_command_parses_selection_and_match_tokens() {
    let catalogue = data_path("catalogue.ron");

    let json = commands::cmd_profile(&catalogue, &["drop".to_string()], "exclusive").unwrap();
    let matched: Vec<Recipe> = serde_json::from_str(&json).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Arcane Dust");

    let err = commands::cmd_profile(&catalogue, &["drop".to_string()], "sometimes").unwrap_err();
    assert!(matches!(err, ToolError::Engine(EngineError::InvalidProfile(_))));
}

#[test]
fn test_usage_command_narrows_by_name() {
    let json = commands::cmd_usage(
        &data_path("catalogue.ron"),
        Some("glass vial".to_string()),
        &[],
    )
    .unwrap();

    let summaries: Vec<UsageSummary> = serde_json::from_str(&json).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].reference_npc_price, Some(4));
}

#[test]
fn test_usage_command_rejects_unknown_type_tokens() {
    let err = commands::cmd_usage(&data_path("catalogue.ron"), None, &["loot".to_string()])
        .unwrap_err();
    assert!(matches!(err, ToolError::UnknownMaterialType(_)));
    assert_eq!(
        err.to_string(),
        "unknown material type 'loot' (expected profession, drop or buy)"
    );
}
