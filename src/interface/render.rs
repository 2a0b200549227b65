use crate::comparator::{
    annotated, comparable_families, format_normalized, mixed_families, price_per_display_unit,
    ranked, RankedItem,
};
use crate::models::{Item, MeasureFamily};

/// Normalized price scaled to the family's display unit, e.g. "2.40/kg".
fn display_unit_price(row: &RankedItem) -> String {
    if !row.normalized.is_finite() {
        return "-".to_string();
    }
    let (label, _) = row.item.unit.family().display_unit();
    format!("{:.2}/{}", price_per_display_unit(row.item), label)
}

/// Display the item list as a table with value column and best-value markers.
///
/// With `sorted`, rows are ordered by value; the `#` column still shows each
/// item's stored position so it can be referenced in `edit` and `remove`.
pub fn display_item_table(items: &[Item], sorted: bool) {
    if items.is_empty() {
        println!("No items added yet.");
        println!("Run 'comprice add' to start comparing prices.");
        return;
    }

    let rows = if sorted { ranked(items) } else { annotated(items) };

    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    println!();
    println!(
        "{:>3}  {:<8}  {:<width$}  {:>10}  {:>12}  {:>10}  {:>12}",
        "#",
        "Id",
        "Name",
        "Price",
        "Volume",
        "Value",
        "Unit price",
        width = name_width
    );

    for row in &rows {
        let volume = format!("{} {}", row.item.volume, row.item.unit);
        let best = if row.is_best { "  Best" } else { "" };

        println!(
            "{:>3}  {:<8}  {:<width$}  {:>10.2}  {:>12}  {:>10}  {:>12}{}",
            row.position + 1,
            row.item.id,
            row.item.name,
            row.item.price,
            volume,
            format_normalized(row.normalized),
            display_unit_price(row),
            best,
            width = name_width
        );
    }

    if mixed_families(items) {
        display_mixed_family_warning(items);
    }

    println!();
}

/// Display only the best-value items.
pub fn display_best(items: &[Item]) {
    let best: Vec<RankedItem> = annotated(items).into_iter().filter(|r| r.is_best).collect();

    if best.is_empty() {
        println!("No comparable items (every item needs a price and volume above 0).");
        return;
    }

    let label = if best.len() == 1 { "Best value" } else { "Best value (tied)" };
    println!("{}:", label);
    for row in &best {
        println!(
            "  #{} {} - {} per {} ({})",
            row.position + 1,
            row.item.name,
            format_normalized(row.normalized),
            row.item.unit.family().base_label(),
            display_unit_price(row)
        );
    }

    if mixed_families(items) {
        display_mixed_family_warning(items);
    }
}

fn display_mixed_family_warning(items: &[Item]) {
    let families: Vec<String> = comparable_families(items)
        .into_iter()
        .map(|f: MeasureFamily| f.to_string())
        .collect();
    println!();
    println!(
        "Warning: comparing across {} units; the best value may not be meaningful.",
        families.join(" and ")
    );
}
