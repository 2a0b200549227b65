pub mod export;
pub mod prompts;
pub mod render;

pub use export::export_csv;
pub use prompts::{choose_item, prompt_item_patch, prompt_unit, prompt_yes_no};
pub use render::{display_best, display_item_table};
