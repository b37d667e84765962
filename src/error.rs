//! Error types for the inventory manager

use std::fmt;
use std::io;

/// Unified error type for store persistence operations
#[derive(Debug)]
pub enum InventoryError {
    /// File I/O failed (missing file, permission denied, ...)
    Io(io::Error),
    /// The CSV layer reported a read or write failure
    Csv(csv::Error),
    /// File contents are not valid UTF-8 text
    InvalidEncoding,
    /// The file has no lines at all
    EmptyFile,
    /// The first line is not the expected `name,price,quantity` header
    MalformedHeader { found: String },
    /// Refusing to save an inventory with no products
    EmptyInventory,
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Io(e) => write!(f, "I/O error: {}", e),
            InventoryError::Csv(e) => write!(f, "CSV error: {}", e),
            InventoryError::InvalidEncoding => {
                write!(f, "File is not valid UTF-8 text")
            }
            InventoryError::EmptyFile => write!(f, "File is empty"),
            InventoryError::MalformedHeader { found } => write!(
                f,
                "Malformed header: expected 'name,price,quantity', found '{}'",
                found
            ),
            InventoryError::EmptyInventory => {
                write!(f, "Inventory is empty, nothing to save")
            }
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Io(e) => Some(e),
            InventoryError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InventoryError {
    fn from(err: io::Error) -> Self {
        InventoryError::Io(err)
    }
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        InventoryError::Csv(err)
    }
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
