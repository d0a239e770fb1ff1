//! Drink recipe definitions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// One ingredient slot: any mix of the listed item kinds, totalling `count`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    pub items: BTreeSet<Identifier>,
    pub count: u32,
}

impl IngredientRequirement {
    pub fn new(items: impl IntoIterator<Item = Identifier>, count: u32) -> Self {
        Self {
            items: items.into_iter().collect(),
            count,
        }
    }

    pub fn accepts(&self, kind: &Identifier) -> bool {
        self.items.contains(kind)
    }
}

/// Per-barrel modifiers for a recipe that ages in that barrel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrelRequirement {
    pub barrel_type: Identifier,
    /// Scales the quality reached while aging in this barrel
    #[serde(default = "default_multiplier")]
    pub quality_multiplier: f64,
    /// Age after which the drink's identity is shown to players
    #[serde(default)]
    pub reveal_age_seconds: f64,
}

fn default_multiplier() -> f64 {
    1.0
}

impl BarrelRequirement {
    pub fn new(barrel_type: Identifier) -> Self {
        Self {
            barrel_type,
            quality_multiplier: 1.0,
            reveal_age_seconds: 0.0,
        }
    }
}

/// A registered drink recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    pub id: Identifier,
    /// Display name, falls back to the id
    #[serde(default)]
    pub name: Option<String>,
    /// Empty means this recipe is not brewed from ingredients
    #[serde(default)]
    pub ingredients: Vec<IngredientRequirement>,
    /// Empty means no barrel may be used
    #[serde(default)]
    pub barrels: Vec<BarrelRequirement>,
    /// Empty means any heat source
    #[serde(default)]
    pub heat_sources: Vec<Identifier>,
    #[serde(default)]
    pub distillation_runs: u32,
    #[serde(default)]
    pub requires_distillation: bool,
}

impl RecipeDefinition {
    /// Create a recipe with no ingredients, barrels or heat restriction
    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            name: None,
            ingredients: Vec::new(),
            barrels: Vec::new(),
            heat_sources: Vec::new(),
            distillation_runs: 0,
            requires_distillation: false,
        }
    }

    /// Add an ingredient requirement
    pub fn with_ingredient(mut self, items: impl IntoIterator<Item = Identifier>, count: u32) -> Self {
        self.ingredients.push(IngredientRequirement::new(items, count));
        self
    }

    /// Allow aging in a barrel
    pub fn with_barrel(mut self, barrel: BarrelRequirement) -> Self {
        self.barrels.push(barrel);
        self
    }

    /// Restrict to a heat source
    pub fn with_heat_source(mut self, heat_source: Identifier) -> Self {
        self.heat_sources.push(heat_source);
        self
    }

    pub fn with_distillation(mut self, runs: u32, required: bool) -> Self {
        self.distillation_runs = runs;
        self.requires_distillation = required;
        self
    }

    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }

    /// Modifier data for an exact barrel kind
    pub fn barrel_requirement(&self, barrel_type: &Identifier) -> Option<&BarrelRequirement> {
        self.barrels.iter().find(|b| &b.barrel_type == barrel_type)
    }

    /// Barrel gate: no barrel needs a barrel-less recipe, a barrel needs an entry for it
    pub fn accepts_barrel(&self, barrel_type: Option<&Identifier>) -> bool {
        match barrel_type {
            None => self.barrels.is_empty(),
            Some(barrel) => self.barrel_requirement(barrel).is_some(),
        }
    }

    pub fn accepts_heat_source(&self, heat_source: &Identifier) -> bool {
        self.heat_sources.is_empty() || self.heat_sources.contains(heat_source)
    }

    pub fn is_brewable(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::try_parse(s).unwrap()
    }

    #[test]
    fn test_barrel_gate_is_strict() {
        let plain = RecipeDefinition::new(id("brewery:ale"));
        let aged = RecipeDefinition::new(id("brewery:whiskey"))
            .with_barrel(BarrelRequirement::new(id("brewery:oak")));

        assert!(plain.accepts_barrel(None));
        assert!(!plain.accepts_barrel(Some(&id("brewery:oak"))));
        assert!(!aged.accepts_barrel(None));
        assert!(aged.accepts_barrel(Some(&id("brewery:oak"))));
        assert!(!aged.accepts_barrel(Some(&id("brewery:spruce"))));
    }

    #[test]
    fn test_heat_source_wildcard() {
        let any = RecipeDefinition::new(id("brewery:ale"));
        let fire_only = RecipeDefinition::new(id("brewery:vodka")).with_heat_source(id("fire"));

        assert!(any.accepts_heat_source(&id("furnace")));
        assert!(fire_only.accepts_heat_source(&id("fire")));
        assert!(!fire_only.accepts_heat_source(&id("furnace")));
    }

    #[test]
    fn test_deserialize_defaults() {
        let recipe: RecipeDefinition = toml::from_str(
            r#"
            id = "brewery:ale"

            [[ingredients]]
            items = ["minecraft:wheat"]
            count = 3

            [[barrels]]
            barrel_type = "brewery:oak"
            "#,
        )
        .unwrap();

        assert!(recipe.is_brewable());
        assert_eq!(recipe.ingredients[0].count, 3);
        assert_eq!(recipe.barrels[0].quality_multiplier, 1.0);
        assert!(recipe.heat_sources.is_empty());
        assert_eq!(recipe.distillation_runs, 0);
        assert!(!recipe.requires_distillation);
        assert_eq!(recipe.display_name(), "brewery:ale");
    }
}
