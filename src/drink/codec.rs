//! Reading and writing drink state on item stacks.

use tracing::debug;

use super::attributes::DrinkAttributes;
use super::state::DrinkState;
use crate::brewing::{RecipeDefinition, RecipeRegistry};
use crate::identifier::Identifier;
use crate::item::{ItemKinds, ItemStack};

/// Simulation ticks per second
pub const TICKS_PER_SECOND: f64 = 20.0;

/// Age reported for stacks with no numeric age entry
pub const UNSET_AGE: f64 = f64::MIN;

/// Path prefix wrongly given to drink ids by early releases
const LEGACY_TYPE_PREFIX: &str = "drinks/";

/// Heat source assumed for drinks that never recorded one
pub fn default_heat_source() -> Identifier {
    Identifier::from_parts("minecraft", "fire")
}

/// Typed access to the drink attributes of item stacks.
///
/// Every query falls back to a documented default instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct DrinkStateCodec<'a> {
    registry: &'a RecipeRegistry,
    items: &'a ItemKinds,
}

impl<'a> DrinkStateCodec<'a> {
    pub fn new(registry: &'a RecipeRegistry, items: &'a ItemKinds) -> Self {
        Self { registry, items }
    }

    /// Attributes of a stack that carries any
    fn attributes(&self, stack: &ItemStack) -> Option<DrinkAttributes> {
        stack.attributes.as_ref().map(DrinkAttributes::from_blob)
    }

    /// Attributes of a drink stack that carries any
    fn drink_attributes(&self, stack: &ItemStack) -> Option<DrinkAttributes> {
        if self.items.is_drink(stack) {
            self.attributes(stack)
        } else {
            None
        }
    }

    /// The recipe a drink was brewed from.
    ///
    /// Ids stored as `ns:drinks/<name>` that do not resolve are retried once
    /// as `ns:<name>`, and that lookup is final.
    pub fn get_type(&self, stack: &ItemStack) -> Option<&'a RecipeDefinition> {
        let attrs = self.drink_attributes(stack)?;
        let raw = attrs.drink_type.unwrap_or_default();
        let id = Identifier::try_parse(&raw)?;

        if let Some(recipe) = self.registry.get(&id) {
            return Some(recipe);
        }

        let stripped = id.path().strip_prefix(LEGACY_TYPE_PREFIX)?;
        let legacy = id.with_path(stripped)?;
        debug!("Migrating legacy drink id {} to {}", id, legacy);
        self.registry.get(&legacy)
    }

    /// Stored quality; -1 for non-drinks and stacks without attributes
    pub fn get_quality(&self, stack: &ItemStack) -> f64 {
        match self.drink_attributes(stack) {
            Some(attrs) => attrs.quality.unwrap_or(0.0),
            None => -1.0,
        }
    }

    /// Barrel the drink aged in, empty when none
    pub fn get_barrel_type(&self, stack: &ItemStack) -> String {
        self.drink_attributes(stack)
            .and_then(|attrs| attrs.barrel_type)
            .unwrap_or_default()
    }

    /// Whether the stored distillation count has reached the recipe's runs
    pub fn get_distillation_status(&self, stack: &ItemStack) -> bool {
        let Some(recipe) = self.get_type(stack) else {
            return false;
        };
        let count = self
            .attributes(stack)
            .and_then(|attrs| attrs.distillation_count)
            .unwrap_or(0);
        count >= i64::from(recipe.distillation_runs)
    }

    /// Recorded heat source, `minecraft:fire` when none was recorded.
    ///
    /// Returns None only when a recorded value is not a valid identifier.
    pub fn get_heat_source(&self, stack: &ItemStack) -> Option<Identifier> {
        match self.attributes(stack).and_then(|attrs| attrs.heat_source) {
            Some(raw) => Identifier::try_parse(&raw),
            None => Some(default_heat_source()),
        }
    }

    pub fn can_be_distillated(&self, stack: &ItemStack) -> bool {
        if self.get_distillation_status(stack) {
            return false;
        }
        let requires = self
            .get_type(stack)
            .is_some_and(|recipe| recipe.requires_distillation);
        requires || self.items.is_ingredient_mixture(stack)
    }

    /// Numeric age entry, or `default` when missing or not a number
    pub fn get_age_ticks_or(&self, stack: &ItemStack, default: f64) -> f64 {
        self.attributes(stack)
            .and_then(|attrs| attrs.age_ticks)
            .unwrap_or(default)
    }

    /// Age in ticks, `UNSET_AGE` when unknown
    pub fn get_age_ticks(&self, stack: &ItemStack) -> f64 {
        self.get_age_ticks_or(stack, UNSET_AGE)
    }

    pub fn get_age_seconds(&self, stack: &ItemStack) -> f64 {
        self.get_age_ticks(stack) / TICKS_PER_SECOND
    }

    /// Time spent cooking before aging, if recorded
    pub fn get_cook_age_ticks(&self, stack: &ItemStack) -> Option<f64> {
        self.attributes(stack).and_then(|attrs| attrs.cook_age_ticks)
    }

    /// Quality multiplier carried by precursors, 1.0 when absent
    pub fn get_ingredient_multiplier(&self, stack: &ItemStack) -> f64 {
        self.attributes(stack)
            .and_then(|attrs| attrs.quality_multiplier)
            .unwrap_or(1.0)
    }

    /// A finished drink with all five state entries written
    pub fn create_drink(
        &self,
        drink_type: &Identifier,
        age_ticks: i32,
        quality: f64,
        distillation_count: u32,
        heat_source: &Identifier,
    ) -> ItemStack {
        let attrs = DrinkAttributes {
            drink_type: Some(drink_type.to_string()),
            quality: Some(quality),
            age_ticks: Some(f64::from(age_ticks)),
            distillation_count: Some(i64::from(distillation_count)),
            heat_source: Some(heat_source.to_string()),
            ..DrinkAttributes::default()
        };

        let mut stack = ItemStack::new(self.items.drink.clone(), 1);
        stack.attributes = Some(attrs.to_blob());
        stack
    }

    /// An unfinished brew: type, zero age and a quality multiplier only
    pub fn create_precursor(&self, drink_type: &Identifier, quality_multiplier: f64) -> ItemStack {
        let attrs = DrinkAttributes {
            drink_type: Some(drink_type.to_string()),
            age_ticks: Some(0.0),
            quality_multiplier: Some(quality_multiplier),
            ..DrinkAttributes::default()
        };

        let mut stack = ItemStack::new(self.items.drink.clone(), 1);
        stack.attributes = Some(attrs.to_blob());
        stack
    }

    /// Decode the full drink state of a stack
    pub fn read_state(&self, stack: &ItemStack) -> DrinkState {
        let distillation_count = self
            .attributes(stack)
            .and_then(|attrs| attrs.distillation_count)
            .map(|count| u32::try_from(count.max(0)).unwrap_or(u32::MAX))
            .unwrap_or(0);

        DrinkState {
            drink_type: self.get_type(stack).map(|recipe| recipe.id.clone()),
            quality: self.get_quality(stack),
            age_ticks: self.get_age_ticks(stack),
            distillation_count,
            barrel_type: self.get_barrel_type(stack),
            heat_source: self.get_heat_source(stack),
            quality_multiplier: self.get_ingredient_multiplier(stack),
            distilled: self.get_distillation_status(stack),
            can_distill: self.can_be_distillated(stack),
        }
    }
}
