//! In-memory product store
//!
//! Products are kept in insertion order and all lookups are linear,
//! case-insensitive scans that resolve to the first match. Validation of
//! names and numeric values happens at the input boundaries (menu, CSV
//! loader), not here.

use crate::models::{Product, ProductPatch};

/// Ordered collection of products owned by one session.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Append a product. Duplicate names are allowed.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// First product whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name_matches(name))
    }

    /// Apply a patch to the first matching product. Returns whether a
    /// product was found; an empty patch on an existing product still
    /// reports true.
    pub fn update(&mut self, name: &str, patch: ProductPatch) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.name_matches(name)) else {
            return false;
        };
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(quantity) = patch.quantity {
            product.quantity = quantity;
        }
        true
    }

    /// Remove the first matching product and return it. With duplicate
    /// names only that one instance is removed.
    pub fn remove(&mut self, name: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.name_matches(name))?;
        Some(self.products.remove(index))
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Merge a loaded record set into the store.
    ///
    /// For each incoming product the first name match gets its quantity
    /// summed and its price replaced with the incoming one; products with
    /// no match are appended. Returns how many incoming products matched,
    /// so callers can derive the new-record count as `incoming - matched`.
    pub fn merge(&mut self, incoming: Vec<Product>) -> usize {
        let mut matched = 0;
        for product in incoming {
            match self.products.iter().position(|p| p.name_matches(&product.name)) {
                Some(index) => {
                    let existing = &mut self.products[index];
                    existing.quantity = existing.quantity.saturating_add(product.quantity);
                    existing.price = product.price;
                    matched += 1;
                }
                None => self.products.push(product),
            }
        }
        matched
    }

    /// Overwrite mode: drop the current contents and take the incoming
    /// list as-is, no reconciliation.
    pub fn replace_all(&mut self, incoming: Vec<Product>) {
        self.products = incoming;
    }
}
