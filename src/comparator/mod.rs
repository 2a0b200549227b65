pub mod constants;
pub mod normalize;
pub mod ranking;

pub use constants::*;
pub use normalize::{
    comparable_families, format_normalized, format_ratio, mixed_families, normalized_price,
    normalized_prices, price_per_display_unit,
};
pub use ranking::{
    annotated, best_value_ids, best_value_indices, ranked, sorted_by_value, RankedItem,
};
