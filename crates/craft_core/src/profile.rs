//! Material-type profile filtering.
//!
//! Classifies recipes by the acquisition types among their material
//! lines: "uses only drops", "uses at least one purchased material",
//! and so on. The caller supplies a [`TypeSelection`] (which types) and a
//! [`MatchProfile`] (how to match them).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{lines_by_recipe, normalized, MaterialLine, Recipe};
use crate::error::{EngineError, Result};

/// How a recipe's material types are matched against a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchProfile {
    /// Every material line's type is in the selection.
    Exclusive,
    /// At least one material line's type is in the selection.
    ContainsAny,
    /// Every selected type appears on at least one material line; other
    /// types may be present too.
    ContainsAll,
    /// No material line's type is in the selection.
    NotContainsAny,
}

impl MatchProfile {
    /// Canonical token for this profile.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::ContainsAny => "contains_any",
            Self::ContainsAll => "contains_all",
            Self::NotContainsAny => "not_contains_any",
        }
    }
}

impl fmt::Display for MatchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchProfile {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match normalized(s).as_str() {
            "exclusive" => Ok(Self::Exclusive),
            "contains_any" => Ok(Self::ContainsAny),
            "contains_all" => Ok(Self::ContainsAll),
            "not_contains_any" => Ok(Self::NotContainsAny),
            other => Err(EngineError::InvalidProfile(format!(
                "unknown match profile '{other}'"
            ))),
        }
    }
}

/// A normalized, non-empty set of requested material-type tokens.
///
/// Tokens are kept as opaque lowercase strings rather than parsed into
/// [`crate::catalog::MaterialType`]. A token outside the three known
/// types is accepted and never matches any line, so `contains_all` over
/// a mixed selection is unsatisfiable rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSelection {
    tokens: BTreeSet<String>,
}

impl TypeSelection {
    /// Normalize raw tokens into a selection.
    ///
    /// Blank tokens are dropped; the rest are trimmed and lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidProfile`] when no usable token
    /// remains.
    pub fn parse<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: BTreeSet<String> = raw
            .into_iter()
            .map(|token| normalized(token.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(EngineError::InvalidProfile(
                "no material types requested".to_string(),
            ));
        }

        Ok(Self { tokens })
    }

    /// Whether a canonical type token is in the selection.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// The normalized tokens, in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Whether one recipe's lines satisfy the profile.
fn matches_profile(
    lines: &[&MaterialLine],
    selection: &TypeSelection,
    match_profile: MatchProfile,
) -> bool {
    match match_profile {
        // A line-less recipe offers no evidence of being "exclusively"
        // anything, so it never matches.
        MatchProfile::Exclusive => {
            !lines.is_empty()
                && lines
                    .iter()
                    .all(|line| selection.contains(line.material_type.as_str()))
        }
        MatchProfile::ContainsAny => lines
            .iter()
            .any(|line| selection.contains(line.material_type.as_str())),
        MatchProfile::ContainsAll => selection.tokens().all(|token| {
            lines
                .iter()
                .any(|line| line.material_type.as_str() == token)
        }),
        // Vacuously true for a line-less recipe.
        MatchProfile::NotContainsAny => lines
            .iter()
            .all(|line| !selection.contains(line.material_type.as_str())),
    }
}

/// Recipes whose material-type composition matches the selection.
///
/// Catalogue order is preserved; this filter never reorders.
#[must_use]
pub fn filter_by_material_profile(
    recipes: &[Recipe],
    material_lines: &[MaterialLine],
    selection: &TypeSelection,
    match_profile: MatchProfile,
) -> Vec<Recipe> {
    let grouped = lines_by_recipe(material_lines);

    let matched: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| {
            let lines = grouped.get(&recipe.id).map_or(&[][..], Vec::as_slice);
            matches_profile(lines, selection, match_profile)
        })
        .cloned()
        .collect();

    tracing::debug!(
        profile = %match_profile,
        requested = selection.tokens.len(),
        matched = matched.len(),
        "Profile filter complete"
    );

    matched
}
