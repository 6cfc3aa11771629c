//! Notebook documents in the nbformat v4 interchange format
//!
//! Only the parts of the format the filter touches are typed (cell type,
//! source, ids). Every other field is carried through as raw JSON so that a
//! document that passes through unchanged is written back with the same
//! content.

mod io;
mod model;
mod source;

pub use io::{read, write};
pub use model::{Cell, Notebook};

#[cfg(test)]
pub use model::CellType;
