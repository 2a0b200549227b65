use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ComPriceError;
use crate::models::Unit;

/// Stable identifier for an item, independent of its position in any view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn random() -> Self {
        Self(rand::random())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ComPriceError;

    /// Accepts exactly eight hex digits, the form `Display` produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 8 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ComPriceError::InvalidInput(format!("not an item id: {}", s)));
        }
        u32::from_str_radix(s, 16)
            .map(ItemId)
            .map_err(|_| ComPriceError::InvalidInput(format!("not an item id: {}", s)))
    }
}

/// An item being compared.
///
/// Items persisted without an `id` get a fresh one when loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default = "ItemId::random")]
    pub id: ItemId,

    pub name: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub volume: f64,

    #[serde(default)]
    pub unit: Unit,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, volume: f64, unit: Unit) -> Self {
        Self {
            id: ItemId::random(),
            name: name.into(),
            price,
            volume,
            unit,
        }
    }

    /// A freshly added item: zero price and volume, counted in pieces.
    pub fn placeholder() -> Self {
        let tag: u16 = rand::random();
        Self::new(format!("Item {:04x}", tag), 0.0, 0.0, Unit::Pcs)
    }

    /// Volume expressed in the base unit of the item's measurement family.
    #[inline]
    pub fn base_quantity(&self) -> f64 {
        self.volume * self.unit.multiplier()
    }

    /// Whether both price and volume are finite and positive.
    pub fn is_comparable(&self) -> bool {
        self.price.is_finite() && self.price > 0.0 && self.volume.is_finite() && self.volume > 0.0
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} for {} {}",
            self.name, self.id, self.price, self.volume, self.unit
        )
    }
}

/// A partial update to an item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub volume: Option<f64>,
    pub unit: Option<Unit>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.volume.is_none() && self.unit.is_none()
    }

    pub fn apply(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(volume) = self.volume {
            item.volume = volume;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
    }
}

/// Coerce edited text into a price or volume.
///
/// Anything that is not a finite, non-negative number becomes 0.
pub fn coerce_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        Ok(value) => {
            warn!("Coercing out-of-range value {} to 0", value);
            0.0
        }
        Err(_) => {
            warn!("Coercing non-numeric input '{}' to 0", trimmed);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults() {
        let item = Item::placeholder();
        assert!(item.name.starts_with("Item "));
        assert_eq!(item.name.len(), "Item ".len() + 4);
        assert_eq!(item.price, 0.0);
        assert_eq!(item.volume, 0.0);
        assert_eq!(item.unit, Unit::Pcs);
        assert!(!item.is_comparable());
    }

    #[test]
    fn test_infinite_fields_are_not_comparable() {
        assert!(!Item::new("a", f64::INFINITY, 1.0, Unit::G).is_comparable());
        assert!(!Item::new("b", 1.0, f64::INFINITY, Unit::G).is_comparable());
        assert!(!Item::new("c", 1.0, f64::NAN, Unit::G).is_comparable());
        assert!(Item::new("d", 1.0, 1.0, Unit::G).is_comparable());
    }

    #[test]
    fn test_base_quantity() {
        let item = Item::new("Milk", 1.5, 2.0, Unit::L);
        assert_eq!(item.base_quantity(), 2000.0);
    }

    #[test]
    fn test_item_id_display_and_parse() {
        let id = ItemId(0xab);
        assert_eq!(id.to_string(), "000000ab");
        assert_eq!("000000ab".parse::<ItemId>().unwrap(), id);
        assert!("ab".parse::<ItemId>().is_err());
        assert!("zzzzzzzz".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_legacy_item_without_id_deserializes() {
        let json = r#"{"name": "Rice", "price": 4, "volume": 2, "unit": "kg"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Rice");
        assert_eq!(item.price, 4.0);
        assert_eq!(item.unit, Unit::Kg);
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let json = r#"{"name": "Rice", "price": 4, "volume": 2, "unit": "lb"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut item = Item::new("Eggs", 3.0, 12.0, Unit::Pcs);
        let patch = ItemPatch {
            price: Some(2.5),
            ..Default::default()
        };
        patch.apply(&mut item);
        assert_eq!(item.price, 2.5);
        assert_eq!(item.volume, 12.0);
        assert_eq!(item.name, "Eggs");
        assert!(ItemPatch::default().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("3.25"), 3.25);
        assert_eq!(coerce_number("  7 "), 7.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("-4"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }
}
