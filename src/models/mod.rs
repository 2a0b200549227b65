mod item;
mod unit;

pub use item::{coerce_number, Item, ItemId, ItemPatch};
pub use unit::{MeasureFamily, Unit};
