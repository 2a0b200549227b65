pub mod cli;
pub mod comparator;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{ComPriceError, Result};
pub use models::{Item, ItemId, ItemPatch, MeasureFamily, Unit};
