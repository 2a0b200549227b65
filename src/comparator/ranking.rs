use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::comparator::constants::BEST_VALUE_TOLERANCE;
use crate::comparator::normalize::{normalized_price, normalized_prices};
use crate::models::{Item, ItemId};

/// An item together with its comparison scores.
#[derive(Debug, Clone, Copy)]
pub struct RankedItem<'a> {
    /// Position of the item in the caller's (unsorted) list.
    pub position: usize,
    pub item: &'a Item,
    pub normalized: f64,
    pub is_best: bool,
}

/// Ascending by normalized price; infinity sorts after every finite value.
fn compare_prices(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Positions of every item tied for the best (lowest) normalized price.
///
/// Non-comparable items are never included; if no item is comparable the
/// set is empty.
pub fn best_value_indices(items: &[Item]) -> BTreeSet<usize> {
    let prices = normalized_prices(items);

    let min_price = prices
        .iter()
        .copied()
        .filter(|p| p.is_finite())
        .fold(f64::INFINITY, f64::min);

    if !min_price.is_finite() {
        return BTreeSet::new();
    }

    prices
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_finite() && (*p - min_price).abs() < BEST_VALUE_TOLERANCE)
        .map(|(i, _)| i)
        .collect()
}

/// Ids of the best-value items, for callers that track items by identity.
pub fn best_value_ids(items: &[Item]) -> BTreeSet<ItemId> {
    best_value_indices(items)
        .into_iter()
        .map(|i| items[i].id)
        .collect()
}

/// A copy of the items ordered by ascending normalized price.
///
/// The sort is stable, so items with equal prices keep their input order.
/// Non-comparable items come last.
pub fn sorted_by_value(items: &[Item]) -> Vec<Item> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_prices(normalized_price(a), normalized_price(b)));
    sorted
}

/// Every item with its scores, in sorted-by-value order.
///
/// `position` still refers to the unsorted list, so edits made from this
/// view can be mapped back.
pub fn ranked(items: &[Item]) -> Vec<RankedItem<'_>> {
    let best = best_value_indices(items);

    let mut ranked: Vec<RankedItem> = items
        .iter()
        .enumerate()
        .map(|(position, item)| RankedItem {
            position,
            item,
            normalized: normalized_price(item),
            is_best: best.contains(&position),
        })
        .collect();

    ranked.sort_by(|a, b| compare_prices(a.normalized, b.normalized));
    ranked
}

/// Every item with its scores, in input order.
pub fn annotated(items: &[Item]) -> Vec<RankedItem<'_>> {
    let best = best_value_indices(items);

    items
        .iter()
        .enumerate()
        .map(|(position, item)| RankedItem {
            position,
            item,
            normalized: normalized_price(item),
            is_best: best.contains(&position),
        })
        .collect()
}
