//! Interactive menu shell
//!
//! Reads commands from one input stream and writes everything user-facing
//! to one output stream, so a whole session can be scripted in tests. A
//! failed operation reports its problem and falls back to the menu; the
//! loop only ends on the exit option or end of input.

use std::io::{self, BufRead, Write};

use crate::formatters::{format_inventory_table, format_product, format_stats};
use crate::inventory::Inventory;
use crate::io::{load_csv, save_csv};
use crate::models::{Product, ProductPatch};
use crate::stats::compute_stats;

const MENU: &str = "\
==================================================
 INVENTORY MANAGER
==================================================
1. Add product
2. Show inventory
3. Search product
4. Update product
5. Delete product
6. Show statistics
7. Save inventory to CSV
8. Load inventory from CSV
9. Exit
==================================================";

/// Run the menu loop until the user exits or the input stream ends.
pub fn run<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Welcome to the inventory manager")?;

    loop {
        writeln!(output, "\n{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut output, "Select an option (1-9): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_product(inventory, &mut input, &mut output)?,
            "2" => show_inventory(inventory, &mut output)?,
            "3" => search_product(inventory, &mut input, &mut output)?,
            "4" => update_product(inventory, &mut input, &mut output)?,
            "5" => delete_product(inventory, &mut input, &mut output)?,
            "6" => show_stats(inventory, &mut output)?,
            "7" => save_inventory(inventory, &mut input, &mut output)?,
            "8" => load_inventory(inventory, &mut input, &mut output)?,
            "9" => {
                writeln!(output, "\nGoodbye!")?;
                break;
            }
            other => writeln!(
                output,
                "Invalid option '{other}', choose a number from 1 to 9"
            )?,
        }
    }
    Ok(())
}

/// Print a prompt and read one trimmed line. `None` means the input stream
/// is exhausted, which callers treat as aborting the current operation.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_product<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n--- ADD PRODUCT ---")?;

    let Some(name) = prompt(input, output, "Product name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        writeln!(output, "The name must not be empty")?;
        return Ok(());
    }
    let Some(price_text) = prompt(input, output, "Product price: $")? else {
        return Ok(());
    };
    let Ok(price) = price_text.parse::<f64>() else {
        writeln!(output, "The price must be a valid number")?;
        return Ok(());
    };
    if price < 0.0 {
        writeln!(output, "The price must not be negative")?;
        return Ok(());
    }
    let Some(quantity_text) = prompt(input, output, "Available quantity: ")? else {
        return Ok(());
    };
    let Ok(quantity) = quantity_text.parse::<u32>() else {
        writeln!(output, "The quantity must be a non-negative whole number")?;
        return Ok(());
    };

    inventory.add(Product::new(name.clone(), price, quantity));
    writeln!(output, "Product '{name}' added")?;
    Ok(())
}

fn show_inventory<W: Write>(inventory: &Inventory, output: &mut W) -> io::Result<()> {
    if inventory.is_empty() {
        writeln!(output, "\nThe inventory is empty")?;
        return Ok(());
    }
    write!(output, "\n{}", format_inventory_table(inventory.products()))?;
    Ok(())
}

fn search_product<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n--- SEARCH PRODUCT ---")?;
    let Some(name) = prompt(input, output, "Product name to search: ")? else {
        return Ok(());
    };
    match inventory.find(&name) {
        Some(product) => {
            writeln!(output, "\nProduct found:")?;
            write!(output, "{}", format_product(product))?;
        }
        None => writeln!(output, "No product named '{name}'")?,
    }
    Ok(())
}

fn update_product<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n--- UPDATE PRODUCT ---")?;
    let Some(name) = prompt(input, output, "Product name to update: ")? else {
        return Ok(());
    };
    if inventory.find(&name).is_none() {
        writeln!(output, "No product named '{name}'")?;
        return Ok(());
    }

    writeln!(output, "Leave a field blank to keep its current value")?;
    let Some(price_text) = prompt(input, output, "New price: $")? else {
        return Ok(());
    };
    let price = if price_text.is_empty() {
        None
    } else {
        match price_text.parse::<f64>() {
            Ok(price) => Some(price),
            Err(_) => {
                writeln!(output, "The price must be a valid number")?;
                return Ok(());
            }
        }
    };
    if price.is_some_and(|p| p < 0.0) {
        writeln!(output, "The price must not be negative")?;
        return Ok(());
    }
    let Some(quantity_text) = prompt(input, output, "New quantity: ")? else {
        return Ok(());
    };
    let quantity = if quantity_text.is_empty() {
        None
    } else {
        match quantity_text.parse::<u32>() {
            Ok(quantity) => Some(quantity),
            Err(_) => {
                writeln!(output, "The quantity must be a non-negative whole number")?;
                return Ok(());
            }
        }
    };

    if inventory.update(&name, ProductPatch { price, quantity }) {
        writeln!(output, "Product '{name}' updated")?;
    }
    Ok(())
}

fn delete_product<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n--- DELETE PRODUCT ---")?;
    let Some(name) = prompt(input, output, "Product name to delete: ")? else {
        return Ok(());
    };
    let Some(answer) = prompt(input, output, &format!("Really delete '{name}'? (y/N): "))? else {
        return Ok(());
    };
    if !answer.eq_ignore_ascii_case("y") {
        writeln!(output, "Operation cancelled")?;
        return Ok(());
    }
    match inventory.remove(&name) {
        Some(product) => writeln!(output, "Product '{}' deleted", product.name)?,
        None => writeln!(output, "No product named '{name}'")?,
    }
    Ok(())
}

fn show_stats<W: Write>(inventory: &Inventory, output: &mut W) -> io::Result<()> {
    writeln!(output, "\n--- INVENTORY STATISTICS ---")?;
    match compute_stats(inventory) {
        Some(stats) => write!(output, "{}", format_stats(&stats))?,
        None => writeln!(output, "The inventory is empty")?,
    }
    Ok(())
}

fn save_inventory<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n--- SAVE INVENTORY ---")?;
    let Some(mut path) = prompt(input, output, "File name (default inventory.csv): ")? else {
        return Ok(());
    };
    if path.is_empty() {
        path = String::from("inventory.csv");
    }
    if !path.ends_with(".csv") {
        path.push_str(".csv");
    }
    match save_csv(inventory, &path, true) {
        Ok(()) => writeln!(output, "Inventory saved to {path}")?,
        Err(e) => writeln!(output, "Could not save: {e}")?,
    }
    Ok(())
}

fn load_inventory<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n--- LOAD INVENTORY ---")?;
    let Some(path) = prompt(input, output, "File name to load: ")? else {
        return Ok(());
    };
    let report = match load_csv(&path) {
        Ok(report) => report,
        Err(e) => {
            writeln!(output, "Could not load: {e}")?;
            return Ok(());
        }
    };
    if report.skipped_rows > 0 {
        writeln!(output, "Skipped {} invalid rows", report.skipped_rows)?;
    }
    if report.products.is_empty() {
        writeln!(output, "No valid products in the file")?;
        return Ok(());
    }

    writeln!(output, "Read {} products from {path}", report.products.len())?;
    let Some(answer) = prompt(input, output, "Overwrite the current inventory? (y/N): ")? else {
        return Ok(());
    };
    if answer.eq_ignore_ascii_case("y") {
        let count = report.products.len();
        inventory.replace_all(report.products);
        writeln!(output, "Inventory replaced with {count} products")?;
    } else {
        writeln!(
            output,
            "Merging: matching names get quantities summed and prices replaced"
        )?;
        let total = report.products.len();
        let matched = inventory.merge(report.products);
        writeln!(
            output,
            "Merged: {matched} products updated, {} new, {} in inventory",
            total - matched,
            inventory.len()
        )?;
    }
    Ok(())
}
