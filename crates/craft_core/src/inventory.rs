//! Caller-held material inventories.
//!
//! An [`Inventory`] is the per-call input to the feasibility analyses: a
//! lookup from normalized material name to held quantity, built once from
//! the caller's raw entries and immutable afterwards. Nothing here
//! survives across calls; the engine keeps no inventory state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::normalized;
use crate::error::{EngineError, Result};

/// One raw inventory entry as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Material name, matched case-insensitively against the catalogue.
    pub material_name: String,
    /// Held quantity. Zero is meaningful: it marks a material the caller
    /// tracks but is currently out of.
    pub quantity: u64,
}

impl InventoryEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(material_name: impl Into<String>, quantity: u64) -> Self {
        Self {
            material_name: material_name.into(),
            quantity,
        }
    }

    /// Shape check: usable entries have a non-blank name.
    ///
    /// The unsigned quantity already rules out negative amounts, so the
    /// name is the only thing left to check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.material_name.trim().is_empty()
    }
}

/// An immutable held-materials lookup.
///
/// Duplicate names are merged at construction, so lookups never have to
/// consider more than one slot per material.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    held: HashMap<String, u64>,
}

impl Inventory {
    /// An inventory holding nothing.
    ///
    /// Useful for the analysis variant, where an empty inventory means
    /// "show me everything".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an inventory from raw caller entries.
    ///
    /// Blank-named entries are skipped with a debug log. Entries whose
    /// names collide after normalization have their quantities summed
    /// (saturating), so `Herb 3` and `herb 4` become 7 held. An empty
    /// entry list is a valid empty inventory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInventory`] when the list was
    /// non-empty but every entry failed the shape check. That submission
    /// is malformed input, not an empty inventory.
    pub fn from_entries(entries: &[InventoryEntry]) -> Result<Self> {
        let mut held: HashMap<String, u64> = HashMap::new();
        let mut rejected = 0usize;

        for entry in entries {
            if !entry.is_valid() {
                rejected += 1;
                tracing::debug!(
                    name = %entry.material_name,
                    quantity = entry.quantity,
                    "Skipping inventory entry with blank name"
                );
                continue;
            }
            let slot = held.entry(normalized(&entry.material_name)).or_insert(0);
            *slot = slot.saturating_add(entry.quantity);
        }

        if held.is_empty() && rejected > 0 {
            return Err(EngineError::InvalidInventory { rejected });
        }

        Ok(Self { held })
    }

    /// Held quantity for a material, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, material_name: &str) -> u64 {
        self.held
            .get(&normalized(material_name))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the caller listed this material at all.
    ///
    /// Distinct from a non-zero [`Self::quantity_of`]: a material listed
    /// with quantity 0 still counts as mentioned, which is what the
    /// analysis variant's overlap rule needs.
    #[must_use]
    pub fn mentions(&self, material_name: &str) -> bool {
        self.held.contains_key(&normalized(material_name))
    }

    /// Number of distinct materials held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// Whether the inventory holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
