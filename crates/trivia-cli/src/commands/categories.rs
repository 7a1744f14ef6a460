//! The `trivia categories` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use trivia_sources::config::load_config_from;

use super::open_source;

pub async fn execute(
    source_name: Option<String>,
    bank: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = open_source(&config, source_name.as_deref(), bank.as_deref())?;

    let categories = source
        .categories()
        .await
        .with_context(|| format!("failed to list categories from {} source", source.name()))?;

    if categories.is_empty() {
        println!("No categories available.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Category"]);
    for category in &categories {
        table.add_row(vec![Cell::new(category.id), Cell::new(&category.name)]);
    }

    println!("{table}");
    Ok(())
}
