use serde::Serialize;

use crate::identifier::Identifier;

/// Snapshot of a drink item's simulation state.
///
/// Always decoded from the item's attributes and never written back directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkState {
    pub drink_type: Option<Identifier>,
    pub quality: f64,
    pub age_ticks: f64,
    pub distillation_count: u32,
    pub barrel_type: String,
    pub heat_source: Option<Identifier>,
    pub quality_multiplier: f64,
    /// Stored distillation count has reached the recipe's required runs
    pub distilled: bool,
    pub can_distill: bool,
}

impl DrinkState {
    pub fn age_seconds(&self) -> f64 {
        self.age_ticks / super::TICKS_PER_SECOND
    }

    pub fn has_barrel(&self) -> bool {
        !self.barrel_type.is_empty()
    }
}
