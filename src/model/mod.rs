//! Data model for in-memory tables

mod offset;
mod row;
mod table;

pub use offset::Offset;
pub use row::{IntoRow, Row};
pub use table::Table;
