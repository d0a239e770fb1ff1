//! Resolving an ingredient bag to the recipes it brews.

use tracing::{debug, trace};

use super::recipe::{IngredientRequirement, RecipeDefinition};
use super::registry::RecipeRegistry;
use crate::identifier::Identifier;
use crate::item::ItemStack;

/// Finds every recipe an ingredient bag satisfies
#[derive(Debug, Clone, Copy)]
pub struct RecipeMatcher<'a> {
    registry: &'a RecipeRegistry,
}

impl<'a> RecipeMatcher<'a> {
    pub fn new(registry: &'a RecipeRegistry) -> Self {
        Self { registry }
    }

    /// All recipes matched by `ingredients`, in registry order.
    ///
    /// A recipe matches when its barrel and heat-source gates pass and the bag
    /// is consumed exactly by its requirements, each taken in order with a
    /// single left-to-right pass over the bag. Bag entries are consumed whole
    /// and there is no backtracking, so requirements whose item sets overlap
    /// can reject a bag another consumption order would accept.
    pub fn find_types(
        &self,
        ingredients: &[ItemStack],
        barrel_type: Option<&Identifier>,
        heat_source: &Identifier,
    ) -> Vec<&'a RecipeDefinition> {
        if ingredients.is_empty() {
            return Vec::new();
        }

        let matches: Vec<&'a RecipeDefinition> = self
            .registry
            .all_recipes()
            .filter(|recipe| {
                if !recipe.accepts_barrel(barrel_type) {
                    trace!("{} rejected: barrel {:?}", recipe.id, barrel_type.map(ToString::to_string));
                    return false;
                }
                if !recipe.is_brewable() {
                    return false;
                }
                if !recipe.accepts_heat_source(heat_source) {
                    trace!("{} rejected: heat source {}", recipe.id, heat_source);
                    return false;
                }
                consumes_exactly(&recipe.ingredients, ingredients)
            })
            .collect();

        debug!(
            "{} ingredient stacks matched {} recipe(s)",
            ingredients.len(),
            matches.len()
        );
        matches
    }
}

/// Greedy exact consumption of the bag by the requirements, in order
fn consumes_exactly(requirements: &[IngredientRequirement], bag: &[ItemStack]) -> bool {
    let mut counts: Vec<u32> = bag.iter().map(|stack| stack.count).collect();

    for requirement in requirements {
        let mut remaining = i64::from(requirement.count);

        for (stack, count) in bag.iter().zip(counts.iter_mut()) {
            if *count == 0 || !requirement.accepts(&stack.kind) {
                continue;
            }
            remaining -= i64::from(*count);
            if remaining < 0 {
                return false;
            }
            *count = 0;
        }

        if remaining != 0 {
            return false;
        }
    }

    true
}
