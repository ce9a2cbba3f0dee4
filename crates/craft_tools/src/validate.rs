//! Catalogue data validation.
//!
//! The engine is deliberately tolerant at analysis time: zero-quantity
//! lines never constrain, priced profession materials cost nothing, and
//! orphaned lines simply never surface. That tolerance makes quiet data
//! rot easy, so this validator reports every such defect loudly before a
//! catalogue ships.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use thiserror::Error;

use craft_core::catalog::{normalized, MaterialType, RecipeId};

use crate::files::{CatalogueFile, DataFileError};

/// Error type for validation runs.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The file could not be loaded at all.
    #[error(transparent)]
    File(#[from] DataFileError),
    /// The file loaded but its content has defects.
    #[error("catalogue has {0} validation finding(s)")]
    FindingsPresent(usize),
}

/// A single data-hygiene finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Two recipes share an id.
    DuplicateRecipeId {
        /// The repeated id.
        id: RecipeId,
    },
    /// Two recipes share an exact name.
    DuplicateRecipeName {
        /// The repeated name.
        name: String,
    },
    /// A recipe claims to produce zero output units.
    ZeroQuantityProduced {
        /// Name of the offending recipe.
        recipe: String,
    },
    /// A material line references a recipe id that does not exist.
    OrphanLine {
        /// The dangling reference.
        recipe_id: RecipeId,
        /// Material name on the orphaned line.
        material_name: String,
    },
    /// A material line has a blank name.
    BlankMaterialName {
        /// Name of the owning recipe.
        recipe: String,
    },
    /// A material line consumes zero units.
    ZeroQuantityLine {
        /// Name of the owning recipe.
        recipe: String,
        /// Material name on the line.
        material_name: String,
    },
    /// A profession material carries a purchase price.
    PricedProfessionLine {
        /// Name of the owning recipe.
        recipe: String,
        /// Material name on the line.
        material_name: String,
        /// The price that should have been zero.
        price: u32,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRecipeId { id } => write!(f, "duplicate recipe id {}", id.0),
            Self::DuplicateRecipeName { name } => write!(f, "duplicate recipe name '{name}'"),
            Self::ZeroQuantityProduced { recipe } => {
                write!(f, "recipe '{recipe}' produces zero output units")
            }
            Self::OrphanLine {
                recipe_id,
                material_name,
            } => write!(
                f,
                "material line '{material_name}' references unknown recipe id {}",
                recipe_id.0
            ),
            Self::BlankMaterialName { recipe } => {
                write!(f, "recipe '{recipe}' has a material line with a blank name")
            }
            Self::ZeroQuantityLine {
                recipe,
                material_name,
            } => write!(f, "recipe '{recipe}' consumes zero units of '{material_name}'"),
            Self::PricedProfessionLine {
                recipe,
                material_name,
                price,
            } => write!(
                f,
                "profession material '{material_name}' in recipe '{recipe}' carries price {price}"
            ),
        }
    }
}

/// Validate a catalogue file, returning every finding.
#[must_use]
pub fn validate_catalogue(file: &CatalogueFile) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut ids_seen = HashSet::new();
    let mut names_seen = HashSet::new();
    for recipe in &file.recipes {
        if !ids_seen.insert(recipe.id) {
            findings.push(Finding::DuplicateRecipeId { id: recipe.id });
        }
        if !names_seen.insert(recipe.name.as_str()) {
            findings.push(Finding::DuplicateRecipeName {
                name: recipe.name.clone(),
            });
        }
        if recipe.quantity_produced == 0 {
            findings.push(Finding::ZeroQuantityProduced {
                recipe: recipe.name.clone(),
            });
        }
    }

    let names_by_id: HashMap<RecipeId, &str> = file
        .recipes
        .iter()
        .map(|recipe| (recipe.id, recipe.name.as_str()))
        .collect();

    for line in &file.materials {
        let Some(recipe) = names_by_id.get(&line.recipe_id) else {
            findings.push(Finding::OrphanLine {
                recipe_id: line.recipe_id,
                material_name: line.material_name.clone(),
            });
            continue;
        };
        let recipe = (*recipe).to_string();

        if normalized(&line.material_name).is_empty() {
            findings.push(Finding::BlankMaterialName {
                recipe: recipe.clone(),
            });
        }
        if line.quantity == 0 {
            findings.push(Finding::ZeroQuantityLine {
                recipe: recipe.clone(),
                material_name: line.material_name.clone(),
            });
        }
        if line.material_type == MaterialType::Profession && line.default_npc_price > 0 {
            findings.push(Finding::PricedProfessionLine {
                recipe,
                material_name: line.material_name.clone(),
                price: line.default_npc_price,
            });
        }
    }

    findings
}

/// Validate a catalogue RON file on disk.
///
/// Every finding is logged before the error is returned, so a failing
/// run still tells the operator everything that is wrong.
///
/// # Errors
///
/// Returns [`ValidationError::File`] when the file cannot be loaded and
/// [`ValidationError::FindingsPresent`] when it loads with defects.
pub fn validate_file(path: &Path) -> Result<(), ValidationError> {
    let file = CatalogueFile::load(path)?;
    let findings = validate_catalogue(&file);

    if findings.is_empty() {
        tracing::info!(
            recipes = file.recipes.len(),
            materials = file.materials.len(),
            "Catalogue is clean"
        );
        return Ok(());
    }

    for finding in &findings {
        tracing::error!("{finding}");
    }
    Err(ValidationError::FindingsPresent(findings.len()))
}
