/// Absolute tolerance within which two normalized prices count as a tie.
pub const BEST_VALUE_TOLERANCE: f64 = 1e-6;

/// Maximum number of items in a comparison list.
pub const MAX_ITEMS: usize = 10;

/// Decimal places shown for normalized prices and ratios.
pub const DISPLAY_DECIMALS: usize = 4;

/// Placeholder shown in place of a non-comparable value.
pub const NOT_COMPARABLE: &str = "-";

/// Default storage key (file) for the item list.
pub const DEFAULT_STORE: &str = "comprice.json";
