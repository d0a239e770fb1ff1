//! Item stacks and the item kinds the brewery cares about.

use serde::{Deserialize, Serialize};

use crate::drink::attributes::{AttributeBlob, DrinkAttributes};
use crate::error::Result;
use crate::identifier::Identifier;

/// An item kind with a count and optional persisted attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: Identifier,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeBlob>,
}

fn default_count() -> u32 {
    1
}

impl ItemStack {
    pub fn new(kind: Identifier, count: u32) -> Self {
        Self {
            kind,
            count,
            attributes: None,
        }
    }

    pub fn is_of(&self, kind: &Identifier) -> bool {
        &self.kind == kind
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn has_attributes(&self) -> bool {
        self.attributes.is_some()
    }

    /// Attribute blob, created empty on first use
    pub fn attributes_mut(&mut self) -> &mut AttributeBlob {
        self.attributes.get_or_insert_with(AttributeBlob::new)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode, modify and write back the drink attributes of this stack.
    ///
    /// Only fields the closure changes are rewritten.
    pub fn update_attributes(&mut self, f: impl FnOnce(&mut DrinkAttributes)) {
        let blob = self.attributes_mut();
        let before = DrinkAttributes::from_blob(blob);
        let mut attrs = before.clone();
        f(&mut attrs);
        attrs.write_changes(&before, blob);
    }
}

/// Which item kinds count as finished drinks and as ingredient mixtures.
///
/// The host registers these items; the brewery only compares against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemKinds {
    pub drink: Identifier,
    pub ingredient_mixture: Identifier,
}

impl ItemKinds {
    pub fn is_drink(&self, stack: &ItemStack) -> bool {
        stack.is_of(&self.drink)
    }

    pub fn is_ingredient_mixture(&self, stack: &ItemStack) -> bool {
        stack.is_of(&self.ingredient_mixture)
    }
}

impl Default for ItemKinds {
    fn default() -> Self {
        Self {
            drink: Identifier::from_parts("brewery", "drink_bottle"),
            ingredient_mixture: Identifier::from_parts("brewery", "ingredient_mixture"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drink::attributes::{
        AttrValue, AGE_KEY, DISTILLATED_KEY, HEAT_SOURCE_KEY, QUALITY_KEY,
    };

    #[test]
    fn test_item_kinds() {
        let kinds = ItemKinds::default();
        let drink = ItemStack::new(kinds.drink.clone(), 1);
        let mixture = ItemStack::new(kinds.ingredient_mixture.clone(), 1);
        assert!(kinds.is_drink(&drink));
        assert!(!kinds.is_drink(&mixture));
        assert!(kinds.is_ingredient_mixture(&mixture));
    }

    #[test]
    fn test_update_attributes_creates_blob() {
        let mut stack = ItemStack::new(ItemKinds::default().drink, 1);
        assert!(!stack.has_attributes());

        stack.update_attributes(|attrs| {
            attrs.set_age_ticks(60.0);
        });

        let blob = stack.attributes.as_ref().unwrap();
        assert_eq!(blob.get(AGE_KEY), Some(&AttrValue::Int(60)));
    }

    #[test]
    fn test_update_keeps_untouched_entries() {
        let mut stack = ItemStack::new(ItemKinds::default().drink, 1);
        let blob = stack.attributes_mut();
        blob.put(AGE_KEY, AttrValue::Double(12.75));
        blob.put(DISTILLATED_KEY, AttrValue::Long(3));
        blob.put(HEAT_SOURCE_KEY, AttrValue::Int(7));

        stack.update_attributes(|attrs| {
            attrs.set_quality(5.0);
        });

        let blob = stack.attributes.as_ref().unwrap();
        assert_eq!(blob.get(AGE_KEY), Some(&AttrValue::Double(12.75)));
        assert_eq!(blob.get(DISTILLATED_KEY), Some(&AttrValue::Long(3)));
        assert_eq!(blob.get(HEAT_SOURCE_KEY), Some(&AttrValue::Int(7)));
        assert_eq!(blob.get(QUALITY_KEY), Some(&AttrValue::Double(5.0)));
    }

    #[test]
    fn test_deserialize_defaults_count() {
        let stack = ItemStack::from_json(r#"{"kind":"minecraft:wheat"}"#).unwrap();
        assert_eq!(stack.count, 1);
        assert!(stack.attributes.is_none());
    }

    #[test]
    fn test_json_keeps_value_kinds() {
        let mut stack = ItemStack::new(ItemKinds::default().drink, 1);
        stack.attributes_mut().put(AGE_KEY, AttrValue::Int(5));

        let back = ItemStack::from_json(&stack.to_json().unwrap()).unwrap();
        assert_eq!(back, stack);
        assert!(ItemStack::from_json("{}").is_err());
    }
}
