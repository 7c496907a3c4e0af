//! # Cellar Common Library
//!
//! Shared code for the Cellar catalog viewer:
//! - Canonical wine record model and filter state types
//! - CSV row decoding and normalization
//! - View model construction (filtering, grouping, expand state)
//! - Configuration resolution
//! - Error types

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod view;

pub use error::{Error, Result};
pub use model::{CategoryFilter, FilterState, WineRecord};
