use std::path::Path;

use log::info;

use crate::comparator::{format_normalized, ranked};
use crate::error::Result;
use crate::models::Item;

/// Write the comparison, sorted by value, to a CSV file.
pub fn export_csv(items: &[Item], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "position",
        "id",
        "name",
        "price",
        "volume",
        "unit",
        "normalized_price",
        "best",
    ])?;

    for row in ranked(items) {
        wtr.write_record([
            (row.position + 1).to_string(),
            row.item.id.to_string(),
            row.item.name.clone(),
            row.item.price.to_string(),
            row.item.volume.to_string(),
            row.item.unit.to_string(),
            format_normalized(row.normalized),
            row.is_best.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!("Exported {} items to {}", items.len(), path.display());
    Ok(())
}
