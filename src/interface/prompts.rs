use dialoguer::{Confirm, Input, Select};

use crate::error::{ComPriceError, Result};
use crate::models::{coerce_number, Item, ItemId, ItemPatch, Unit};
use crate::state::ItemListManager;

/// Prompt for a text field, defaulting to its current value.
fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for a price or volume; non-numeric input becomes 0.
fn prompt_number(prompt: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .interact_text()?;
    Ok(coerce_number(&input))
}

/// Prompt for a unit from the fixed list.
pub fn prompt_unit(current: Unit) -> Result<Unit> {
    let options: Vec<&str> = Unit::ALL.iter().map(|u| u.as_str()).collect();
    let default = Unit::ALL.iter().position(|u| *u == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Unit")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Unit::ALL[selection])
}

/// Walk through every field of an item and collect the changes.
pub fn prompt_item_patch(item: &Item) -> Result<ItemPatch> {
    let name = prompt_text("Name", &item.name)?;
    let price = prompt_number("Price", item.price)?;
    let volume = prompt_number("Volume", item.volume)?;
    let unit = prompt_unit(item.unit)?;

    Ok(ItemPatch {
        name: (name != item.name).then_some(name),
        price: (price != item.price).then_some(price),
        volume: (volume != item.volume).then_some(volume),
        unit: (unit != item.unit).then_some(unit),
    })
}

/// Resolve a reference to an item, asking the user when the name is ambiguous.
pub fn choose_item(manager: &ItemListManager, reference: &str) -> Result<ItemId> {
    match manager.resolve(reference) {
        Ok(id) => Ok(id),
        Err(ComPriceError::InvalidInput(msg)) => {
            let candidates = manager.fuzzy_candidates(reference);
            if candidates.len() < 2 {
                return Err(ComPriceError::InvalidInput(msg));
            }

            let mut options: Vec<String> = candidates
                .iter()
                .map(|item| format!("{} [{}]", item.name, item.id))
                .collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            candidates
                .get(selection)
                .map(|item| item.id)
                .ok_or_else(|| ComPriceError::ItemNotFound(reference.to_string()))
        }
        Err(e) => Err(e),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
