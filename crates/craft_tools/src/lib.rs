//! # Craft Development Tools
//!
//! Command-line tools for working with recipe catalogue data:
//! - RON catalogue and inventory file loading
//! - Data validators
//! - Analysis reports (feasibility, profit, profiles, usage) as JSON

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod commands;
pub mod files;
pub mod validate;
