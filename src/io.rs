//! CSV persistence for the inventory
//!
//! The file format is deliberately plain: a literal `name,price,quantity`
//! header followed by one unquoted record per line. Quoting is disabled in
//! both directions, so product names containing commas are not supported.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{InventoryError, Result};
use crate::inventory::Inventory;
use crate::models::Product;

const HEADER: [&str; 3] = ["name", "price", "quantity"];

/// Outcome of a successful load: the accepted records plus how many rows
/// were rejected along the way.
#[derive(Debug)]
pub struct LoadReport {
    pub products: Vec<Product>,
    pub skipped_rows: usize,
}

/// Write the inventory to `path` as CSV.
///
/// Fails with [`InventoryError::EmptyInventory`] before touching the
/// filesystem when there is nothing to save. Prices and quantities are
/// written in their natural decimal form, no fixed precision.
pub fn save_csv<P: AsRef<Path>>(
    inventory: &Inventory,
    path: P,
    include_header: bool,
) -> Result<()> {
    if inventory.is_empty() {
        return Err(InventoryError::EmptyInventory);
    }

    let mut writer = WriterBuilder::new()
        .has_headers(include_header)
        .quote_style(QuoteStyle::Never)
        .from_path(path.as_ref())?;

    for product in inventory.products() {
        writer.serialize(product)?;
    }
    writer.flush()?;

    log::info!(
        "Saved {} products to {}",
        inventory.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read products from a CSV file at `path`.
///
/// Structural problems abort the whole read: a missing or unreadable file,
/// a file with no lines, a first line other than `name,price,quantity`, or
/// content that is not UTF-8. Individual bad rows (wrong field count,
/// unparseable or negative numbers, empty name) are skipped and counted in
/// the returned [`LoadReport`]; a file whose data rows are all bad yields
/// an empty, non-error result.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let file = File::open(path.as_ref())?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut records = reader.records();
    let header = match records.next() {
        None => return Err(InventoryError::EmptyFile),
        Some(record) => record.map_err(classify_csv_error)?,
    };
    if !header.iter().eq(HEADER) {
        return Err(InventoryError::MalformedHeader {
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut products = Vec::new();
    let mut skipped_rows = 0;
    for record in records {
        let record = record.map_err(classify_csv_error)?;
        if is_blank(&record) {
            continue;
        }
        match parse_row(&record) {
            Some(product) => products.push(product),
            None => skipped_rows += 1,
        }
    }

    log::info!(
        "Loaded {} products from {}",
        products.len(),
        path.as_ref().display()
    );
    if skipped_rows > 0 {
        log::warn!("Skipped {} invalid rows", skipped_rows);
    }
    Ok(LoadReport {
        products,
        skipped_rows,
    })
}

/// Lines of only whitespace are treated like the blank lines the CSV
/// reader already drops, not as invalid rows.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

fn parse_row(record: &StringRecord) -> Option<Product> {
    if record.len() != 3 {
        return None;
    }
    let name = record[0].to_string();
    if name.is_empty() {
        return None;
    }
    let price: f64 = record[1].trim().parse().ok()?;
    let quantity: u32 = record[2].trim().parse().ok()?;
    if price < 0.0 {
        return None;
    }
    Some(Product {
        name,
        price,
        quantity,
    })
}

fn classify_csv_error(err: csv::Error) -> InventoryError {
    if matches!(err.kind(), csv::ErrorKind::Utf8 { .. }) {
        return InventoryError::InvalidEncoding;
    }
    InventoryError::Csv(err)
}
