//! Catalogue and inventory file loading.
//!
//! Data files are RON: a catalogue file carries the two flat lists the
//! engine consumes, an inventory file carries raw entries. Loading stops
//! at parsing; data hygiene beyond what serde enforces is the
//! [`crate::validate`] module's job.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use craft_core::catalog::{Catalogue, MaterialLine, MaterialType, Recipe, RecipeId};
use craft_core::inventory::InventoryEntry;

/// Error type for data file operations.
#[derive(Error, Debug)]
pub enum DataFileError {
    /// File not found.
    #[error("Data file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read data file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse data file: {0}")]
    ParseError(#[from] ron::error::SpannedError),
}

/// A recipe catalogue as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueFile {
    /// All recipes.
    pub recipes: Vec<Recipe>,
    /// All material lines, each referencing a recipe by id.
    pub materials: Vec<MaterialLine>,
}

impl CatalogueFile {
    /// Load a catalogue from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataFileError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataFileError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let file: Self = ron::from_str(&contents)?;
        Ok(file)
    }

    /// Load from a RON string (useful for embedded catalogues).
    pub fn from_ron_str(ron: &str) -> Result<Self, DataFileError> {
        let file: Self = ron::from_str(ron)?;
        Ok(file)
    }

    /// Turn the file into an engine snapshot.
    #[must_use]
    pub fn into_catalogue(self) -> Catalogue {
        Catalogue::new(self.recipes, self.materials)
    }

    /// The sample catalogue, kept in sync with `assets/data/catalogue.ron`.
    #[must_use]
    pub fn sample() -> Self {
        let recipes = vec![
            Recipe::new(RecipeId::new(1), "Minor Healing Potion", 2, 18),
            Recipe::new(RecipeId::new(2), "Ironbark Shield", 1, 120),
            Recipe::new(RecipeId::new(3), "Arcane Dust", 4, 5),
            Recipe::new(RecipeId::new(4), "Traveller's Bread", 3, 9),
            Recipe::new(RecipeId::new(5), "Molten Glass", 6, 2),
            Recipe::new(RecipeId::new(6), "Campfire Kit", 1, 12),
        ];
        let materials = vec![
            MaterialLine::new(RecipeId::new(1), "Earthroot Herb", 2, MaterialType::Drop, 3),
            MaterialLine::new(RecipeId::new(1), "Glass Vial", 1, MaterialType::Buy, 4),
            MaterialLine::new(RecipeId::new(2), "Ironbark Plank", 4, MaterialType::Drop, 10),
            MaterialLine::new(RecipeId::new(2), "Iron Fitting", 2, MaterialType::Buy, 15),
            MaterialLine::new(RecipeId::new(2), "Resin Glue", 1, MaterialType::Profession, 0),
            MaterialLine::new(RecipeId::new(3), "Crystal Shard", 1, MaterialType::Drop, 2),
            MaterialLine::new(RecipeId::new(4), "Stoneground Flour", 2, MaterialType::Buy, 2),
            MaterialLine::new(RecipeId::new(4), "Wild Honey", 1, MaterialType::Drop, 4),
            MaterialLine::new(RecipeId::new(5), "Quarry Sand", 3, MaterialType::Profession, 0),
            // Campfire Kit needs nothing.
        ];
        Self { recipes, materials }
    }
}

/// A player inventory as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryFile {
    /// Raw entries; duplicates are summed when the inventory is built.
    pub entries: Vec<InventoryEntry>,
}

impl InventoryFile {
    /// Load an inventory from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataFileError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataFileError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let file: Self = ron::from_str(&contents)?;
        Ok(file)
    }

    /// Load from a RON string.
    pub fn from_ron_str(ron: &str) -> Result<Self, DataFileError> {
        let file: Self = ron::from_str(ron)?;
        Ok(file)
    }

    /// The sample inventory, kept in sync with `assets/data/inventory.ron`.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            entries: vec![
                InventoryEntry::new("Earthroot Herb", 7),
                InventoryEntry::new("Glass Vial", 3),
                // Lower-cased on purpose; lookups are case-insensitive.
                InventoryEntry::new("crystal shard", 10),
                InventoryEntry::new("Stoneground Flour", 1),
                InventoryEntry::new("Quarry Sand", 9),
                InventoryEntry::new("Ironbark Plank", 4),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalogue_from_ron() {
        let ron = r#"
            (
                recipes: [
                    (id: 1, name: "Potion", quantity_produced: 2, npc_sell_price: 18),
                ],
                materials: [
                    (recipe_id: 1, material_name: "Herb", quantity: 2, material_type: drop, default_npc_price: 3),
                ],
            )
        "#;
        let file = CatalogueFile::from_ron_str(ron).unwrap();
        assert_eq!(file.recipes.len(), 1);
        assert_eq!(file.recipes[0].name, "Potion");
        assert_eq!(file.materials[0].material_type, MaterialType::Drop);
    }

    #[test]
    fn test_parse_inventory_from_ron() {
        let ron = r#"
            (
                entries: [
                    (material_name: "Herb", quantity: 7),
                    (material_name: "Vial", quantity: 0),
                ],
            )
        "#;
        let file = InventoryFile::from_ron_str(ron).unwrap();
        assert_eq!(file.entries.len(), 2);
        assert_eq!(file.entries[1].quantity, 0);
    }

    #[test]
    fn test_missing_file_is_its_own_error() {
        let err = CatalogueFile::load("no/such/file.ron").unwrap_err();
        assert!(matches!(err, DataFileError::FileNotFound(_)));
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        let err = CatalogueFile::from_ron_str("(recipes: [oops").unwrap_err();
        assert!(matches!(err, DataFileError::ParseError(_)));
    }

    #[test]
    fn test_sample_catalogue_round_trips_through_ron() {
        let sample = CatalogueFile::sample();
        let ron = ron::to_string(&sample).unwrap();
        let parsed = CatalogueFile::from_ron_str(&ron).unwrap();
        assert_eq!(parsed, sample);
    }
}
