//! A single record of text cells

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::LineEnding;
use crate::error::{Result, TableError};

use super::offset::Offset;

/// Separator used by the display rendering, not by the file codecs
const DISPLAY_SEPARATOR: &str = ", ";

/// An ordered, non-empty sequence of text cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Create a row from its cells. At least one cell is required.
    pub fn new<I, S>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.is_empty() {
            return Err(TableError::InvalidArgument(
                "row must contain at least one cell",
            ));
        }
        Ok(Self { cells })
    }

    /// Get the cell at `offset`
    pub fn get(&self, offset: impl Into<Offset>) -> Result<&str> {
        let i = offset.into().resolve(self.cells.len())?;
        Ok(self.cells[i].as_str())
    }

    /// Replace the cell at `offset`, or append when the offset is
    /// [`Offset::Append`]. Keys are rejected.
    pub fn set(&mut self, offset: impl Into<Offset>, value: impl Into<String>) -> Result<()> {
        match offset.into() {
            Offset::Append => self.cells.push(value.into()),
            offset => {
                let i = offset.resolve(self.cells.len())?;
                self.cells[i] = value.into();
            }
        }
        Ok(())
    }

    /// Remove and return the cell at `offset`; later cells shift down.
    pub fn delete(&mut self, offset: impl Into<Offset>) -> Result<String> {
        let i = offset.into().resolve(self.cells.len())?;
        Ok(self.cells.remove(i))
    }

    /// Validate `offset` and report whether a cell is stored there
    pub fn exists(&self, offset: impl Into<Offset>) -> Result<bool> {
        let i = offset.into().resolve(self.cells.len())?;
        Ok(self.cells.get(i).is_some())
    }

    /// Append a cell
    pub fn push(&mut self, value: impl Into<String>) {
        self.cells.push(value.into());
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Only true after every cell has been deleted
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in order
    pub fn items(&self) -> &[String] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.cells.iter()
    }

    /// Cells joined by `", "` plus a line terminator, for debugging output
    pub fn to_display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.cells.join(DISPLAY_SEPARATOR),
            LineEnding::Native.as_str()
        )
    }
}

impl Index<usize> for Row {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl TryFrom<Vec<String>> for Row {
    type Error = TableError;

    fn try_from(cells: Vec<String>) -> Result<Self> {
        Row::new(cells)
    }
}

impl From<Row> for Vec<String> {
    fn from(row: Row) -> Self {
        row.cells
    }
}

/// Anything that can become a [`Row`]
pub trait IntoRow {
    fn into_row(self) -> Result<Row>;
}

impl IntoRow for Row {
    fn into_row(self) -> Result<Row> {
        Ok(self)
    }
}

impl<S: Into<String>> IntoRow for Vec<S> {
    fn into_row(self) -> Result<Row> {
        Row::new(self)
    }
}

impl<S: Into<String>, const N: usize> IntoRow for [S; N] {
    fn into_row(self) -> Result<Row> {
        Row::new(self)
    }
}

impl<S: Into<String> + Clone> IntoRow for &[S] {
    fn into_row(self) -> Result<Row> {
        Row::new(self.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Row {
        Row::new(["1", "Alice", "23"]).unwrap()
    }

    #[test]
    fn test_new_keeps_cells() {
        let row = sample();
        assert_eq!(row.len(), 3);
        assert_eq!(row.items(), ["1", "Alice", "23"]);
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = Row::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, TableError::InvalidArgument(_)));
    }

    #[test]
    fn test_get() {
        let row = sample();
        assert_eq!(row.get(1).unwrap(), "Alice");
        assert!(matches!(row.get(3), Err(TableError::OutOfRange { .. })));
        assert!(matches!(row.get(-1), Err(TableError::OutOfRange { .. })));
        assert!(matches!(row.get("name"), Err(TableError::InvalidArgument(_))));
    }

    #[test]
    fn test_set_replaces_and_appends() {
        let mut row = sample();
        row.set(2, "24").unwrap();
        assert_eq!(&row[2], "24");

        row.set(Offset::Append, "admin").unwrap();
        assert_eq!(row.items(), ["1", "Alice", "24", "admin"]);
    }

    #[test]
    fn test_set_rejects_bad_offsets() {
        let mut row = sample();
        assert!(matches!(row.set(3, "x"), Err(TableError::OutOfRange { .. })));
        assert!(matches!(
            row.set("age", "x"),
            Err(TableError::InvalidArgument(_))
        ));
        assert_eq!(row, sample());
    }

    #[test]
    fn test_delete_shifts_cells() {
        let mut row = sample();
        assert_eq!(row.delete(0).unwrap(), "1");
        assert_eq!(row.items(), ["Alice", "23"]);
        assert!(matches!(row.delete(2), Err(TableError::OutOfRange { .. })));
    }

    #[test]
    fn test_exists() {
        let row = sample();
        assert!(row.exists(0).unwrap());
        assert!(row.exists(5).is_err());
    }

    #[test]
    fn test_display_text() {
        let row = sample();
        let expected = format!("1, Alice, 23{}", LineEnding::Native.as_str());
        assert_eq!(row.to_display_text(), expected);
        assert_eq!(format!("{}", row), expected);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sample(), Row::new(vec!["1", "Alice", "23"]).unwrap());
        assert_ne!(sample(), Row::new(["1", "Alice"]).unwrap());
    }

    #[test]
    fn test_push_and_iter() {
        let mut row = sample();
        row.push("admin");
        let joined: Vec<&str> = row.iter().map(String::as_str).collect();
        assert_eq!(joined, ["1", "Alice", "23", "admin"]);
        assert_eq!((&row).into_iter().count(), 4);
    }

    #[test]
    fn test_into_row() {
        let cells = ["a".to_string(), "b".to_string()];
        assert_eq!(cells[..].into_row().unwrap().len(), 2);
        assert!(Vec::<&str>::new().into_row().is_err());
    }
}
