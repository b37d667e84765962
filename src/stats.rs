//! Whole-inventory aggregate statistics

use crate::inventory::Inventory;

/// Aggregates over the full inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStats {
    /// Sum of all quantities.
    pub total_units: u64,
    /// Sum of price times quantity over all products.
    pub total_value: f64,
    /// Name and price of the highest-priced product.
    pub most_expensive: (String, f64),
    /// Name and quantity of the product with the most units.
    pub most_stocked: (String, u32),
}

/// Compute statistics in a single pass. Returns `None` for an empty
/// inventory rather than zero-filled stats. Ties on price or quantity
/// resolve to the product added earliest.
pub fn compute_stats(inventory: &Inventory) -> Option<InventoryStats> {
    let products = inventory.products();
    let first = products.first()?;

    let mut total_units: u64 = 0;
    let mut total_value = 0.0;
    let mut most_expensive = first;
    let mut most_stocked = first;

    for product in products {
        total_units += u64::from(product.quantity);
        total_value += product.subtotal();
        if product.price > most_expensive.price {
            most_expensive = product;
        }
        if product.quantity > most_stocked.quantity {
            most_stocked = product;
        }
    }

    Some(InventoryStats {
        total_units,
        total_value,
        most_expensive: (most_expensive.name.clone(), most_expensive.price),
        most_stocked: (most_stocked.name.clone(), most_stocked.quantity),
    })
}
