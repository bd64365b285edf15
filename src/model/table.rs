//! Table: header labels plus an ordered list of rows

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::offset::Offset;
use super::row::{IntoRow, Row};

/// An in-memory table.
///
/// Headers and rows are independent: a row may hold more or fewer cells
/// than there are headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header labels, possibly empty
    headers: Vec<String>,
    /// Rows in insertion order
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Replace the headers wholesale
    pub fn set_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Append a single row
    pub fn add_row(&mut self, row: impl IntoRow) -> Result<()> {
        self.rows.push(row.into_row()?);
        Ok(())
    }

    /// Append rows in order, stopping at the first invalid one.
    ///
    /// Rows before the failing one stay in the table.
    pub fn add_rows<I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoRow,
    {
        for row in rows {
            self.add_row(row)?;
        }
        Ok(())
    }

    /// Replace every row. Nothing changes if any of the new rows is invalid.
    pub fn set_rows<I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoRow,
    {
        self.rows = rows
            .into_iter()
            .map(IntoRow::into_row)
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }

    /// Remove every row, keeping the headers
    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Get the row at `offset`
    pub fn get(&self, offset: impl Into<Offset>) -> Result<&Row> {
        let i = offset.into().resolve(self.rows.len())?;
        Ok(&self.rows[i])
    }

    /// Get the row at `offset` for in-place editing
    pub fn get_mut(&mut self, offset: impl Into<Offset>) -> Result<&mut Row> {
        let i = offset.into().resolve(self.rows.len())?;
        Ok(&mut self.rows[i])
    }

    /// Replace the row at `offset`, or append it when the offset is
    /// [`Offset::Append`].
    pub fn set(&mut self, offset: impl Into<Offset>, row: impl IntoRow) -> Result<()> {
        match offset.into() {
            Offset::Append => self.add_row(row),
            offset => {
                let i = offset.resolve(self.rows.len())?;
                self.rows[i] = row.into_row()?;
                Ok(())
            }
        }
    }

    /// Remove and return the row at `offset`; later rows shift down.
    pub fn delete(&mut self, offset: impl Into<Offset>) -> Result<Row> {
        let i = offset.into().resolve(self.rows.len())?;
        Ok(self.rows.remove(i))
    }

    /// Validate `offset` and report whether a row is stored there
    pub fn exists(&self, offset: impl Into<Offset>) -> Result<bool> {
        let i = offset.into().resolve(self.rows.len())?;
        Ok(self.rows.get(i).is_some())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in order. The borrow keeps the table frozen until the
    /// iterator is dropped.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl Index<usize> for Table {
    type Output = Row;

    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
