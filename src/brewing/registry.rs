//! Registry of drink recipes.

use std::collections::HashMap;

use tracing::warn;

use super::recipe::RecipeDefinition;
use crate::error::{BreweryError, Result};
use crate::identifier::Identifier;

/// Read-only set of recipes, iterated in registration order
#[derive(Debug, Clone, Default)]
pub struct RecipeRegistry {
    recipes: Vec<RecipeDefinition>,
    by_id: HashMap<Identifier, usize>,
}

impl RecipeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting duplicate ids and zero-count requirements
    pub fn from_definitions(definitions: impl IntoIterator<Item = RecipeDefinition>) -> Result<Self> {
        let mut registry = Self::new();
        for recipe in definitions {
            registry.register(recipe)?;
        }
        Ok(registry)
    }

    /// Add a recipe at the end of the iteration order
    pub fn register(&mut self, recipe: RecipeDefinition) -> Result<()> {
        if self.by_id.contains_key(&recipe.id) {
            return Err(BreweryError::DuplicateRecipe(recipe.id));
        }
        for (index, requirement) in recipe.ingredients.iter().enumerate() {
            if requirement.count == 0 {
                return Err(BreweryError::ZeroCount {
                    recipe: recipe.id.clone(),
                    index,
                });
            }
            if requirement.items.is_empty() {
                warn!("Recipe {} requirement {} names no items and can never be met", recipe.id, index);
            }
        }

        self.by_id.insert(recipe.id.clone(), self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    /// Get a recipe by id
    pub fn get(&self, id: &Identifier) -> Option<&RecipeDefinition> {
        self.by_id.get(id).map(|&i| &self.recipes[i])
    }

    /// Get all recipes in registration order
    pub fn all_recipes(&self) -> impl Iterator<Item = &RecipeDefinition> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::try_parse(s).unwrap()
    }

    #[test]
    fn test_registration_order_and_lookup() {
        let registry = RecipeRegistry::from_definitions([
            RecipeDefinition::new(id("brewery:mead")),
            RecipeDefinition::new(id("brewery:ale")),
            RecipeDefinition::new(id("brewery:cider")),
        ])
        .unwrap();

        let order: Vec<String> = registry.all_recipes().map(|r| r.id.to_string()).collect();
        assert_eq!(order, vec!["brewery:mead", "brewery:ale", "brewery:cider"]);
        assert!(registry.get(&id("brewery:ale")).is_some());
        assert!(registry.get(&id("brewery:wine")).is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = RecipeRegistry::from_definitions([
            RecipeDefinition::new(id("brewery:ale")),
            RecipeDefinition::new(id("brewery:ale")),
        ]);
        assert!(matches!(result, Err(BreweryError::DuplicateRecipe(_))));
    }

    #[test]
    fn test_zero_count_rejected() {
        let recipe = RecipeDefinition::new(id("brewery:ale")).with_ingredient([id("wheat")], 0);
        let result = RecipeRegistry::from_definitions([recipe]);
        assert!(matches!(result, Err(BreweryError::ZeroCount { index: 0, .. })));
    }
}
