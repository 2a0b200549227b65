use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::comparator::DEFAULT_STORE;
use crate::models::{coerce_number, ItemPatch, Unit};
use crate::state::Encoding;

/// ComPrice — compare unit prices and find the best value.
#[derive(Parser, Debug)]
#[command(name = "comprice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the item store.
    #[arg(short, long, global = true, default_value = DEFAULT_STORE)]
    pub file: PathBuf,

    /// Format used when saving the store.
    #[arg(short, long, global = true, value_enum, default_value_t = Encoding::Json)]
    pub encoding: Encoding,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Item fields settable from the command line.
///
/// Price and volume are taken as text and coerced, so `abc` becomes 0.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemFields {
    /// Item name.
    #[arg(long)]
    pub name: Option<String>,

    /// Total price.
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Amount in the chosen unit.
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Option<String>,

    /// One of pcs, kg, g, L, ml.
    #[arg(long, value_parser = parse_unit)]
    pub unit: Option<Unit>,
}

impl ItemFields {
    pub fn to_patch(&self) -> ItemPatch {
        ItemPatch {
            name: self.name.clone(),
            price: self.price.as_deref().map(coerce_number),
            volume: self.volume.as_deref().map(coerce_number),
            unit: self.unit,
        }
    }
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    s.parse::<Unit>().map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all items with their value; the best value is marked.
    List {
        /// Order items by value instead of by insertion.
        #[arg(long)]
        sorted: bool,
    },

    /// Add an item (up to 10).
    Add {
        #[command(flatten)]
        fields: ItemFields,
    },

    /// Edit an item by id, position or name. Prompts when no field is given.
    Edit {
        /// Item id, 1-based position, or name.
        item: String,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// Remove an item by id, position or name.
    Remove {
        /// Item id, 1-based position, or name.
        item: String,
    },

    /// Remove all items.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show only the best-value items.
    Best,

    /// Export the comparison, sorted by value, as CSV.
    Export {
        /// Destination CSV file.
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List { sorted: false }
    }
}
