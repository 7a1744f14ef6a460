//! The `trivia validate` command.

use std::path::PathBuf;

use anyhow::Result;

use trivia_sources::bank::{load_bank_directory, parse_bank, validate_bank};

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks = if bank_path.is_dir() {
        load_bank_directory(&bank_path)?
    } else {
        vec![parse_bank(&bank_path)?]
    };

    let mut total_warnings = 0;

    for bank in &banks {
        let name = if bank.name.is_empty() {
            "(unnamed)"
        } else {
            bank.name.as_str()
        };
        println!(
            "Bank: {name} ({} categories, {} questions)",
            bank.categories.len(),
            bank.questions.len()
        );

        let warnings = validate_bank(bank);
        for w in &warnings {
            let prefix = w
                .question_id
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
