//! Persisted per-item attributes.
//!
//! `AttributeBlob` is the loose key/value store the host item model persists.
//! `DrinkAttributes` is the typed record the rest of the crate works with; the
//! conversion between the two is the only place key names and value kinds
//! appear.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const TYPE_KEY: &str = "BrewType";
pub const QUALITY_KEY: &str = "BrewQuality";
pub const AGE_KEY: &str = "BrewAge";
pub const COOK_AGE_KEY: &str = "BrewCookAge";
pub const QUALITY_MULT_KEY: &str = "BrewQualityMult";
pub const BARREL_TYPE_KEY: &str = "BrewBarrelType";
pub const DISTILLATED_KEY: &str = "BrewDistillated";
pub const HEAT_SOURCE_KEY: &str = "BrewHeatSource";

/// A single persisted attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl AttrValue {
    /// Numeric value widened to f64, None for strings
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Long(v) => Some(*v as f64),
            AttrValue::Float(v) => Some(*v as f64),
            AttrValue::Double(v) => Some(*v),
            AttrValue::String(_) => None,
        }
    }

    /// Numeric value truncated to i64, None for strings
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v as i64),
            AttrValue::Long(v) => Some(*v),
            AttrValue::Float(v) => Some(*v as i64),
            AttrValue::Double(v) => Some(*v as i64),
            AttrValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Key/value attribute store attached to an item instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBlob {
    entries: BTreeMap<String, AttrValue>,
}

impl AttributeBlob {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// True only when the entry exists and holds a number
    pub fn contains_numeric(&self, key: &str) -> bool {
        self.get(key).and_then(AttrValue::as_f64).is_some()
    }

    pub fn put(&mut self, key: &str, value: AttrValue) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Typed view of the drink-related entries of an `AttributeBlob`.
///
/// A field is `None` when its entry is missing or holds the wrong kind of
/// value. Heat source is the exception: an entry of the wrong kind is kept as
/// an empty string so that "present but unusable" stays distinct from
/// "missing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrinkAttributes {
    pub drink_type: Option<String>,
    pub quality: Option<f64>,
    pub age_ticks: Option<f64>,
    pub cook_age_ticks: Option<f64>,
    pub quality_multiplier: Option<f64>,
    pub barrel_type: Option<String>,
    pub distillation_count: Option<i64>,
    pub heat_source: Option<String>,
}

impl DrinkAttributes {
    /// Decode the drink entries of a blob
    pub fn from_blob(blob: &AttributeBlob) -> Self {
        let number = |key: &str| blob.get(key).and_then(AttrValue::as_f64);
        let string = |key: &str| blob.get(key).and_then(AttrValue::as_str).map(str::to_string);

        Self {
            drink_type: string(TYPE_KEY),
            quality: number(QUALITY_KEY),
            age_ticks: number(AGE_KEY),
            cook_age_ticks: number(COOK_AGE_KEY),
            quality_multiplier: number(QUALITY_MULT_KEY),
            barrel_type: string(BARREL_TYPE_KEY),
            distillation_count: blob.get(DISTILLATED_KEY).and_then(AttrValue::as_i64),
            heat_source: blob
                .get(HEAT_SOURCE_KEY)
                .map(|v| v.as_str().unwrap_or_default().to_string()),
        }
    }

    /// Each field encoded under its persisted key
    fn entries(&self) -> [(&'static str, Option<AttrValue>); 8] {
        [
            (AGE_KEY, self.age_ticks.map(ticks_value)),
            (QUALITY_KEY, self.quality.map(AttrValue::Double)),
            (TYPE_KEY, self.drink_type.clone().map(AttrValue::String)),
            (DISTILLATED_KEY, self.distillation_count.map(count_value)),
            (HEAT_SOURCE_KEY, self.heat_source.clone().map(AttrValue::String)),
            (QUALITY_MULT_KEY, self.quality_multiplier.map(AttrValue::Double)),
            (COOK_AGE_KEY, self.cook_age_ticks.map(ticks_value)),
            (BARREL_TYPE_KEY, self.barrel_type.clone().map(AttrValue::String)),
        ]
    }

    /// Write every field that is set; unset fields leave the blob untouched
    pub fn write_to(&self, blob: &mut AttributeBlob) {
        for (key, value) in self.entries() {
            if let Some(value) = value {
                blob.put(key, value);
            }
        }
    }

    /// Write only the fields that differ from `before`.
    ///
    /// Entries the caller did not change keep their stored value and kind.
    /// A field cleared to `None` removes its entry.
    pub fn write_changes(&self, before: &Self, blob: &mut AttributeBlob) {
        for ((key, value), (_, old)) in self.entries().into_iter().zip(before.entries()) {
            if value == old {
                continue;
            }
            match value {
                Some(value) => blob.put(key, value),
                None => {
                    blob.remove(key);
                }
            }
        }
    }

    /// Encode into a fresh blob
    pub fn to_blob(&self) -> AttributeBlob {
        let mut blob = AttributeBlob::new();
        self.write_to(&mut blob);
        blob
    }

    pub fn set_age_ticks(&mut self, ticks: f64) -> &mut Self {
        self.age_ticks = Some(ticks);
        self
    }

    pub fn set_cook_age_ticks(&mut self, ticks: f64) -> &mut Self {
        self.cook_age_ticks = Some(ticks);
        self
    }

    pub fn set_quality(&mut self, quality: f64) -> &mut Self {
        self.quality = Some(quality);
        self
    }

    pub fn set_barrel_type(&mut self, barrel: impl Into<String>) -> &mut Self {
        self.barrel_type = Some(barrel.into());
        self
    }

    pub fn set_distillation_count(&mut self, count: u32) -> &mut Self {
        self.distillation_count = Some(count as i64);
        self
    }
}

/// Whole tick counts are stored as Int, anything else as Double
fn ticks_value(ticks: f64) -> AttrValue {
    if ticks.fract() == 0.0 && ticks >= f64::from(i32::MIN) && ticks <= f64::from(i32::MAX) {
        AttrValue::Int(ticks as i32)
    } else {
        AttrValue::Double(ticks)
    }
}

fn count_value(count: i64) -> AttrValue {
    i32::try_from(count).map_or(AttrValue::Long(count), AttrValue::Int)
}
