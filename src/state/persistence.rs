use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, warn};

use crate::comparator::MAX_ITEMS;
use crate::error::Result;
use crate::models::{Item, ItemId};

/// On-disk representation of the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Encoding {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// Compact JSON array, base64-wrapped.
    Base64,
}

/// Encode items for storage.
pub fn encode_items(items: &[Item], encoding: Encoding) -> Result<String> {
    let encoded = match encoding {
        Encoding::Json => serde_json::to_string_pretty(items)?,
        Encoding::Base64 => STANDARD.encode(serde_json::to_string(items)?),
    };
    Ok(encoded)
}

/// Decode a stored item list.
///
/// Detects plain JSON versus base64-wrapped JSON. Anything that fails to
/// decode yields an empty list rather than an error.
pub fn decode_items(payload: &str) -> Vec<Item> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Vec::new();
    }

    let json = if payload.starts_with('[') || payload == "null" {
        payload.to_string()
    } else {
        let bytes = match STANDARD.decode(payload) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Discarding stored items: invalid base64 ({})", e);
                return Vec::new();
            }
        };
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Discarding stored items: invalid UTF-8 ({})", e);
                return Vec::new();
            }
        }
    };

    // `null` is treated like an empty list
    let mut items: Vec<Item> = match serde_json::from_str::<Option<Vec<Item>>>(&json) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            warn!("Discarding stored items: {}", e);
            return Vec::new();
        }
    };

    if items.len() > MAX_ITEMS {
        warn!(
            "Stored list has {} items; keeping the first {}",
            items.len(),
            MAX_ITEMS
        );
        items.truncate(MAX_ITEMS);
    }

    sanitize_items(&mut items);
    items
}

/// Repair hand-edited entries: give duplicated ids a fresh one and clamp
/// negative prices and volumes to 0.
fn sanitize_items(items: &mut [Item]) {
    let mut seen: HashSet<ItemId> = HashSet::new();

    for item in items.iter_mut() {
        if !seen.insert(item.id) {
            let duplicate = item.id;
            while seen.contains(&item.id) {
                item.id = ItemId::random();
            }
            seen.insert(item.id);
            warn!(
                "Stored item '{}' reused id {}; assigned {}",
                item.name, duplicate, item.id
            );
        }

        if item.price < 0.0 {
            warn!("Stored item '{}' has negative price {}; using 0", item.name, item.price);
            item.price = 0.0;
        }
        if item.volume < 0.0 {
            warn!("Stored item '{}' has negative volume {}; using 0", item.name, item.volume);
            item.volume = 0.0;
        }
    }
}

/// Load items from a store file.
///
/// A missing file is an empty list; so is a file whose content cannot be
/// decoded.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No store at {}; starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let items = decode_items(&content);
    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Save items to a store file.
pub fn save_items<P: AsRef<Path>>(path: P, items: &[Item], encoding: Encoding) -> Result<()> {
    let path = path.as_ref();
    let encoded = encode_items(items, encoding)?;
    fs::write(path, encoded)?;
    debug!("Saved {} items to {} ({:?})", items.len(), path.display(), encoding);
    Ok(())
}
