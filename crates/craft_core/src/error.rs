//! Error types for the analysis engine.

use thiserror::Error;

/// Result type alias using [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while preparing caller input for analysis.
///
/// These are the only failure classes the engine exposes. Everything the
/// catalogue itself can throw at an analysis (recipes without material
/// lines, zero-quantity lines, an empty catalogue) has a defined result
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A non-empty inventory submission contained no usable entry.
    #[error("invalid inventory: all {rejected} entries were rejected")]
    InvalidInventory {
        /// How many entries failed the shape check.
        rejected: usize,
    },

    /// A match profile or material-type selection could not be interpreted.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = EngineError::InvalidInventory { rejected: 3 };
        assert_eq!(
            err.to_string(),
            "invalid inventory: all 3 entries were rejected"
        );

        let err = EngineError::InvalidProfile("unknown match profile 'sometimes'".to_string());
        assert!(err.to_string().contains("sometimes"));
    }
}
