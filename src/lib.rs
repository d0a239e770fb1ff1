//! Recipe resolution and drink state encoding for a brewing simulation.
//!
//! [`brewing::RecipeMatcher`] turns a bag of ingredients plus the barrel and
//! heat source used into the recipes it satisfies. [`drink::DrinkStateCodec`]
//! reads and writes the brewing state persisted on drink items.

pub mod brewing;
pub mod config;
pub mod drink;
pub mod error;
pub mod identifier;
pub mod item;

pub use brewing::{RecipeDefinition, RecipeMatcher, RecipeRegistry};
pub use config::BreweryConfig;
pub use drink::{DrinkState, DrinkStateCodec};
pub use error::{BreweryError, Result};
pub use identifier::Identifier;
pub use item::{ItemKinds, ItemStack};
