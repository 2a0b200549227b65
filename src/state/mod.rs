mod manager;
mod persistence;

pub use manager::ItemListManager;
pub use persistence::{decode_items, encode_items, load_items, save_items, Encoding};
