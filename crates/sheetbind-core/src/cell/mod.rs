//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`CellStorage`] - Sparse row-major cell storage

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange};
pub use storage::CellStorage;
pub use value::{CellValue, SharedString};
