//! Plain-text rendering of inventory data for the terminal

use crate::models::Product;
use crate::stats::InventoryStats;

const TABLE_WIDTH: usize = 60;

/// Render all products as a fixed-width table.
pub fn format_inventory_table(products: &[Product]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output.push_str(" PRODUCT INVENTORY\n");
    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output.push_str(&format!(
        "{:<25} {:>10} {:>10}\n",
        "Product", "Price", "Quantity"
    ));
    output.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));

    for product in products {
        output.push_str(&format!(
            "{:<25} ${:>9.2} {:>10}\n",
            product.name, product.price, product.quantity
        ));
    }

    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output
}

/// Render one product in detail, including its line value.
pub fn format_product(product: &Product) -> String {
    let mut output = String::new();
    output.push_str(&format!("  Name:     {}\n", product.name));
    output.push_str(&format!("  Price:    ${:.2}\n", product.price));
    output.push_str(&format!("  Quantity: {}\n", product.quantity));
    output.push_str(&format!("  Value:    ${:.2}\n", product.subtotal()));
    output
}

/// Render the aggregate statistics block.
pub fn format_stats(stats: &InventoryStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("  Total units:     {}\n", stats.total_units));
    output.push_str(&format!("  Total value:     ${:.2}\n", stats.total_value));
    let (name, price) = &stats.most_expensive;
    output.push_str(&format!("  Most expensive:  {name} (${price:.2})\n"));
    let (name, quantity) = &stats.most_stocked;
    output.push_str(&format!("  Most stocked:    {name} ({quantity} units)\n"));
    output
}
