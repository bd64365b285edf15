//! csvtable - In-memory tables backed by simple delimited text files
//!
//! A [`Table`] holds header labels and an ordered list of [`Row`]s. Tables
//! can be filled by hand or read from a file, and written back out with a
//! configurable separator. Fields are never quoted or escaped.
//!
//! ```
//! use csvtable::{Offset, Table};
//!
//! let mut table = Table::new();
//! table.set_headers(["id", "name"]);
//! table.add_row(["1", "Alice"]).unwrap();
//! table.set(Offset::Append, ["2", "Bob"]).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get(1).unwrap().get(1).unwrap(), "Bob");
//! assert!(table.get("name").is_err());
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod model;

pub use config::{Config, LineEnding, DEFAULT_SEPARATOR};
pub use error::{Result, TableError};
pub use model::{IntoRow, Offset, Row, Table};
