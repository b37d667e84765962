use serde::Serialize;

/// A single inventory record.
///
/// The name doubles as the lookup key for search, update, delete and merge,
/// compared case-insensitively. The store itself never enforces uniqueness:
/// duplicate names can coexist, and key-based operations always act on the
/// first match in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Value of this line: price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Case-insensitive name comparison used wherever the name is a key.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Field-wise update for a product; a `None` field keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductPatch {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl ProductPatch {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.quantity.is_none()
    }
}
