//! Drink items: persisted attributes and the typed state read from them.

pub mod attributes;
pub mod codec;
pub mod state;

pub use attributes::{AttrValue, AttributeBlob, DrinkAttributes};
pub use codec::{default_heat_source, DrinkStateCodec, TICKS_PER_SECOND, UNSET_AGE};
pub use state::DrinkState;
