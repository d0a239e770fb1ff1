use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::brewing::{RecipeDefinition, RecipeRegistry};
use crate::error::{BreweryError, Result};
use crate::item::ItemKinds;

/// Top-level brewery configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreweryConfig {
    /// Item kinds the host registers for drinks and mixtures
    #[serde(default)]
    pub items: ItemKinds,
    /// Recipe definitions, in registry order
    #[serde(default)]
    pub recipes: Vec<RecipeDefinition>,
}

impl BreweryConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BreweryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Validate the recipes and build the registry
    pub fn build_registry(&self) -> Result<RecipeRegistry> {
        let registry = RecipeRegistry::from_definitions(self.recipes.iter().cloned())?;
        if registry.is_empty() {
            warn!("No drink recipes configured");
        } else {
            info!("Registered {} drink recipe(s)", registry.len());
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Identifier;

    const SAMPLE: &str = r#"
        [items]
        drink = "brewery:drink_bottle"
        ingredient_mixture = "brewery:ingredient_mixture"

        [[recipes]]
        id = "brewery:beer"
        name = "Beer"

        [[recipes.ingredients]]
        items = ["minecraft:wheat"]
        count = 6

        [[recipes.barrels]]
        barrel_type = "brewery:oak"
        quality_multiplier = 1.2

        [[recipes]]
        id = "brewery:vodka"
        heat_sources = ["minecraft:fire", "minecraft:soul_fire"]
        distillation_runs = 3
        requires_distillation = true

        [[recipes.ingredients]]
        items = ["minecraft:potato"]
        count = 10
    "#;

    #[test]
    fn test_parse_sample() {
        let config = BreweryConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.recipes.len(), 2);
        assert_eq!(config.items, ItemKinds::default());

        let beer = &config.recipes[0];
        assert_eq!(beer.display_name(), "Beer");
        assert_eq!(beer.barrels[0].quality_multiplier, 1.2);

        let vodka = &config.recipes[1];
        assert_eq!(vodka.heat_sources.len(), 2);
        assert_eq!(vodka.distillation_runs, 3);
        assert!(vodka.requires_distillation);
    }

    #[test]
    fn test_build_registry() {
        let config = BreweryConfig::from_toml(SAMPLE).unwrap();
        let registry = config.build_registry().unwrap();
        let vodka = Identifier::try_parse("brewery:vodka").unwrap();
        assert!(registry.get(&vodka).is_some());
    }

    #[test]
    fn test_empty_config_builds_empty_registry() {
        let config = BreweryConfig::from_toml("").unwrap();
        let registry = config.build_registry().unwrap();
        assert!(registry.is_empty());
        assert_eq!(config.items, ItemKinds::default());
    }

    #[test]
    fn test_invalid_identifier_is_a_parse_error() {
        let result = BreweryConfig::from_toml(
            r#"
            [[recipes]]
            id = "Brewery:Beer"
            "#,
        );
        assert!(matches!(result, Err(BreweryError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = BreweryConfig::from_file("does/not/exist.toml");
        assert!(matches!(result, Err(BreweryError::Io { .. })));
    }
}
