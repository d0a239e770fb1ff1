//! Error types for building registries and loading configuration.
//!
//! Queries against drinks and recipes never fail; only construction does.

use std::path::PathBuf;

use thiserror::Error;

use crate::identifier::Identifier;

#[derive(Debug, Error)]
pub enum BreweryError {
    /// Failed to read a file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to (de)serialize an item
    #[error("Item JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text that is not a valid `namespace:path`
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Two recipes registered under one id
    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(Identifier),

    /// An ingredient requirement asking for zero items
    #[error("Recipe {recipe} has an ingredient requirement with count 0 (index {index})")]
    ZeroCount { recipe: Identifier, index: usize },
}

pub type Result<T> = std::result::Result<T, BreweryError>;
