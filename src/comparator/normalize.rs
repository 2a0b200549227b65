use std::collections::BTreeSet;

use crate::comparator::constants::{DISPLAY_DECIMALS, NOT_COMPARABLE};
use crate::models::{Item, MeasureFamily};

/// Price per base unit of the item's measurement family.
///
/// Returns `f64::INFINITY` for items that cannot be compared: a price or
/// volume that is zero, negative, infinite or NaN, or a zero base quantity.
pub fn normalized_price(item: &Item) -> f64 {
    if !item.is_comparable() {
        return f64::INFINITY;
    }

    let total_base_units = item.base_quantity();
    if total_base_units == 0.0 {
        return f64::INFINITY;
    }

    let price = item.price / total_base_units;
    if price.is_finite() && price > 0.0 {
        price
    } else {
        f64::INFINITY
    }
}

/// Normalized prices for every item, in input order.
pub fn normalized_prices(items: &[Item]) -> Vec<f64> {
    items.iter().map(normalized_price).collect()
}

/// Normalized price scaled to the family's display unit (per kg, per L, per pcs).
pub fn price_per_display_unit(item: &Item) -> f64 {
    let (_, size) = item.unit.family().display_unit();
    normalized_price(item) * size
}

/// Format a normalized price, or `-` if it is not comparable.
pub fn format_normalized(price: f64) -> String {
    if price.is_finite() {
        format!("{:.*}", DISPLAY_DECIMALS, price)
    } else {
        NOT_COMPARABLE.to_string()
    }
}

/// Raw price over volume in the item's own unit.
pub fn format_ratio(item: &Item) -> String {
    if item.volume.is_nan() || item.volume <= 0.0 {
        return NOT_COMPARABLE.to_string();
    }
    format!("{:.*}", DISPLAY_DECIMALS, item.price / item.volume)
}

/// Measurement families present among comparable items.
pub fn comparable_families(items: &[Item]) -> BTreeSet<MeasureFamily> {
    items
        .iter()
        .filter(|item| normalized_price(item).is_finite())
        .map(|item| item.unit.family())
        .collect()
}

/// Whether comparable items span more than one measurement family.
///
/// Such a comparison is still computed, but its best value means little.
pub fn mixed_families(items: &[Item]) -> bool {
    comparable_families(items).len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    #[test]
    fn test_normalized_price_basic() {
        let rice = Item::new("Rice", 4.0, 2.0, Unit::Kg);
        assert!((normalized_price(&rice) - 0.002).abs() < 1e-12);

        let eggs = Item::new("Eggs", 3.0, 12.0, Unit::Pcs);
        assert!((normalized_price(&eggs) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_non_comparable_is_infinite() {
        assert_eq!(normalized_price(&Item::new("a", 0.0, 5.0, Unit::Pcs)), f64::INFINITY);
        assert_eq!(normalized_price(&Item::new("b", 5.0, 0.0, Unit::G)), f64::INFINITY);
        assert_eq!(normalized_price(&Item::new("c", -1.0, 5.0, Unit::Ml)), f64::INFINITY);
        assert_eq!(normalized_price(&Item::new("d", 1.0, -5.0, Unit::L)), f64::INFINITY);
        assert_eq!(normalized_price(&Item::new("e", f64::NAN, 1.0, Unit::L)), f64::INFINITY);
    }

    #[test]
    fn test_infinite_fields_are_infinite() {
        let both = Item::new("both", f64::INFINITY, f64::INFINITY, Unit::G);
        assert_eq!(normalized_price(&both), f64::INFINITY);

        // Would otherwise normalize to 0 and win best value
        let endless = Item::new("endless", 1.0, f64::INFINITY, Unit::G);
        assert_eq!(normalized_price(&endless), f64::INFINITY);

        // Quotient underflows to 0
        let huge = Item::new("huge", f64::MIN_POSITIVE, f64::MAX, Unit::Kg);
        assert_eq!(normalized_price(&huge), f64::INFINITY);
    }

    #[test]
    fn test_price_per_display_unit() {
        let milk = Item::new("Milk", 2.0, 500.0, Unit::Ml);
        assert!((price_per_display_unit(&milk) - 4.0).abs() < 1e-9);

        let flour = Item::new("Flour", 3.0, 1.5, Unit::Kg);
        assert!((price_per_display_unit(&flour) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_normalized(0.002), "0.0020");
        assert_eq!(format_normalized(f64::INFINITY), "-");

        assert_eq!(format_ratio(&Item::new("x", 3.0, 2.0, Unit::Kg)), "1.5000");
        assert_eq!(format_ratio(&Item::new("y", 3.0, 0.0, Unit::Kg)), "-");
    }

    #[test]
    fn test_mixed_families() {
        let same = vec![
            Item::new("a", 1.0, 1.0, Unit::Kg),
            Item::new("b", 1.0, 500.0, Unit::G),
            Item::new("c", 0.0, 1.0, Unit::Pcs),
        ];
        assert!(!mixed_families(&same));

        let mixed = vec![
            Item::new("a", 1.0, 1.0, Unit::Kg),
            Item::new("b", 1.0, 6.0, Unit::Pcs),
        ];
        assert!(mixed_families(&mixed));
    }
}
