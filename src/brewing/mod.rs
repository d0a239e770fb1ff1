//! Drink recipes and recipe resolution.

pub mod matcher;
pub mod recipe;
pub mod registry;

pub use matcher::RecipeMatcher;
pub use recipe::{BarrelRequirement, IngredientRequirement, RecipeDefinition};
pub use registry::RecipeRegistry;
