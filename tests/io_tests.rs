use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;

use inventory_manager::error::InventoryError;
use inventory_manager::inventory::Inventory;
use inventory_manager::io::{load_csv, save_csv};
use inventory_manager::models::Product;

// Test fixtures - sample data for testing

fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn sample_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add(Product::new("Widget", 9.99, 100));
    inventory.add(Product::new("Gadget", 19.5, 5));
    inventory
}

// Tests for save_csv

#[test]
fn test_save_writes_header_and_rows() {
    let file = NamedTempFile::new().unwrap();
    let inventory = sample_inventory();

    save_csv(&inventory, file.path(), true).unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "name,price,quantity\nWidget,9.99,100\nGadget,19.5,5\n");
}

#[test]
fn test_save_without_header() {
    let file = NamedTempFile::new().unwrap();
    let inventory = sample_inventory();

    save_csv(&inventory, file.path(), false).unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "Widget,9.99,100\nGadget,19.5,5\n");
}

#[test]
fn test_save_empty_inventory_fails_without_writing() {
    let file = write_temp_csv("untouched");
    let inventory = Inventory::new();

    let result = save_csv(&inventory, file.path(), true);

    assert!(matches!(result, Err(InventoryError::EmptyInventory)));
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "untouched");
}

// Tests for load_csv

#[test]
fn test_save_and_load_round_trip() {
    let file = NamedTempFile::new().unwrap();
    let inventory = sample_inventory();

    save_csv(&inventory, file.path(), true).unwrap();
    let report = load_csv(file.path()).unwrap();

    assert_eq!(report.products, inventory.products());
    assert_eq!(report.skipped_rows, 0);
}

#[test]
fn test_load_skips_malformed_rows() {
    let file = write_temp_csv("name,price,quantity\nA,1,2\nbad,row\nB,3,4\n");

    let report = load_csv(file.path()).unwrap();

    assert_eq!(report.products.len(), 2);
    assert_eq!(report.skipped_rows, 1);
    assert_eq!(report.products[0], Product::new("A", 1.0, 2));
    assert_eq!(report.products[1], Product::new("B", 3.0, 4));
}

#[test]
fn test_load_rejects_bad_header() {
    let file = write_temp_csv("product,cost,amount\nA,1,2\n");

    let result = load_csv(file.path());

    match result {
        Err(InventoryError::MalformedHeader { found }) => {
            assert_eq!(found, "product,cost,amount");
        }
        other => panic!("expected MalformedHeader, got {other:?}"),
    }
}

#[test]
fn test_load_rejects_header_with_extra_whitespace() {
    let file = write_temp_csv("name, price,quantity\nA,1,2\n");

    let result = load_csv(file.path());
    assert!(matches!(result, Err(InventoryError::MalformedHeader { .. })));
}

#[test]
fn test_load_empty_file() {
    let file = NamedTempFile::new().unwrap();

    let result = load_csv(file.path());
    assert!(matches!(result, Err(InventoryError::EmptyFile)));
}

#[test]
fn test_load_missing_file() {
    let result = load_csv("/this/file/does/not/exist.csv");
    assert!(matches!(result, Err(InventoryError::Io(_))));
}

#[test]
fn test_load_header_only_file_yields_empty_list() {
    let file = write_temp_csv("name,price,quantity\n");

    let report = load_csv(file.path()).unwrap();
    assert!(report.products.is_empty());
    assert_eq!(report.skipped_rows, 0);
}

#[test]
fn test_load_skips_invalid_values() {
    let file = write_temp_csv(
        "name,price,quantity\n\
         A,-1,2\n\
         B,1,-2\n\
         C,1,2.5\n\
         D,abc,2\n\
         ,1,2\n\
         E, 1.5 ,3\n",
    );

    let report = load_csv(file.path()).unwrap();

    // Only E survives: negative price, negative or fractional quantity,
    // non-numeric price and empty name are all rejected row by row.
    assert_eq!(report.products.len(), 1);
    assert_eq!(report.skipped_rows, 5);
    assert_eq!(report.products[0], Product::new("E", 1.5, 3));
}

#[test]
fn test_load_skips_blank_lines_without_counting_them() {
    let file = write_temp_csv("name,price,quantity\nA,1,2\n\n   \nB,3,4\n");

    let report = load_csv(file.path()).unwrap();

    assert_eq!(report.products.len(), 2);
    assert_eq!(report.skipped_rows, 0);
}

#[test]
fn test_load_all_rows_invalid_is_not_an_error() {
    let file = write_temp_csv("name,price,quantity\nbad,row\nworse\n");

    let report = load_csv(file.path()).unwrap();
    assert!(report.products.is_empty());
    assert_eq!(report.skipped_rows, 2);
}

#[test]
fn test_load_preserves_file_order() {
    let file = write_temp_csv("name,price,quantity\nZebra,1,1\nApple,2,2\nMango,3,3\n");

    let report = load_csv(file.path()).unwrap();

    let names: Vec<&str> = report.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
}
