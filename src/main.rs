use std::path::Path;

use clap::Parser;
use log::debug;

use comprice::cli::{Cli, Command, ItemFields};
use comprice::comparator::best_value_ids;
use comprice::error::Result;
use comprice::interface::{
    choose_item, display_best, display_item_table, export_csv, prompt_item_patch, prompt_yes_no,
};
use comprice::state::{load_items, save_items, Encoding, ItemListManager};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let store = cli.file.as_path();
    debug!("Using store {} ({:?})", store.display(), cli.encoding);

    match command {
        Command::List { sorted } => cmd_list(store, sorted),
        Command::Add { fields } => cmd_add(store, cli.encoding, &fields),
        Command::Edit { item, fields } => cmd_edit(store, cli.encoding, &item, &fields),
        Command::Remove { item } => cmd_remove(store, cli.encoding, &item),
        Command::Clear { yes } => cmd_clear(store, cli.encoding, yes),
        Command::Best => cmd_best(store),
        Command::Export { path } => cmd_export(store, &path),
    }
}

/// Show the comparison table.
fn cmd_list(store: &Path, sorted: bool) -> Result<()> {
    let items = load_items(store)?;
    display_item_table(&items, sorted);
    Ok(())
}

/// Add a new item with defaults overridden by any given fields.
fn cmd_add(store: &Path, encoding: Encoding, fields: &ItemFields) -> Result<()> {
    let mut manager = ItemListManager::new(load_items(store)?);

    let id = manager.add_item(&fields.to_patch())?;
    save_items(store, manager.items(), encoding)?;

    if let Some(item) = manager.get(id) {
        println!("Added '{}' [{}].", item.name, id);
    }
    display_item_table(manager.items(), false);
    Ok(())
}

/// Edit one item, interactively if no fields were given.
fn cmd_edit(store: &Path, encoding: Encoding, reference: &str, fields: &ItemFields) -> Result<()> {
    let mut manager = ItemListManager::new(load_items(store)?);
    if manager.is_empty() {
        println!("No items to edit.");
        return Ok(());
    }

    let id = choose_item(&manager, reference)?;

    let mut patch = fields.to_patch();
    if patch.is_empty() {
        if let Some(item) = manager.get(id) {
            patch = prompt_item_patch(item)?;
        }
    }

    if patch.is_empty() {
        println!("Nothing changed.");
        return Ok(());
    }

    manager.update(id, &patch)?;
    save_items(store, manager.items(), encoding)?;

    if best_value_ids(manager.items()).contains(&id) {
        println!("Item updated; it is now a best value.");
    } else {
        println!("Item updated.");
    }
    display_item_table(manager.items(), false);
    Ok(())
}

/// Remove one item.
fn cmd_remove(store: &Path, encoding: Encoding, reference: &str) -> Result<()> {
    let mut manager = ItemListManager::new(load_items(store)?);
    if manager.is_empty() {
        println!("No items to remove.");
        return Ok(());
    }

    let id = choose_item(&manager, reference)?;
    let removed = manager.remove(id)?;
    save_items(store, manager.items(), encoding)?;

    println!("Removed '{}'.", removed.name);
    Ok(())
}

/// Remove all items after confirmation.
fn cmd_clear(store: &Path, encoding: Encoding, yes: bool) -> Result<()> {
    let mut manager = ItemListManager::new(load_items(store)?);
    if manager.is_empty() {
        println!("No items to clear.");
        return Ok(());
    }

    if !yes && !prompt_yes_no(&format!("Remove all {} items?", manager.len()), false)? {
        return Ok(());
    }

    manager.clear();
    save_items(store, manager.items(), encoding)?;
    println!("All items cleared.");
    Ok(())
}

/// Show the best-value items only.
fn cmd_best(store: &Path) -> Result<()> {
    let items = load_items(store)?;
    if items.is_empty() {
        println!("No items added yet.");
        return Ok(());
    }
    display_best(&items);
    Ok(())
}

/// Export the comparison as CSV.
fn cmd_export(store: &Path, path: &Path) -> Result<()> {
    let items = load_items(store)?;
    export_csv(&items, path)?;
    println!("Exported {} items to {}.", items.len(), path.display());
    Ok(())
}
