//! Line-oriented codec for unquoted delimited text

use std::io::{self, BufRead, Write};

use crate::config::LineEnding;
use crate::model::Table;

use super::{Codec, Record};

/// Delimited text with no quoting or escaping.
///
/// A separator inside a cell is indistinguishable from a field boundary.
/// Lines end at `\n` or `\r\n`. A blank line is a record with one empty
/// cell; only the empty read at end of input produces nothing.
pub struct DelimitedCodec {
    separator: String,
    line_ending: LineEnding,
}

impl DelimitedCodec {
    pub fn new(separator: impl Into<String>, line_ending: LineEnding) -> Self {
        Self {
            separator: separator.into(),
            line_ending,
        }
    }

    fn write_line<S: AsRef<str>>(&self, output: &mut dyn Write, cells: &[S]) -> io::Result<()> {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                output.write_all(self.separator.as_bytes())?;
            }
            output.write_all(cell.as_ref().as_bytes())?;
        }
        output.write_all(self.line_ending.as_str().as_bytes())
    }
}

impl Codec for DelimitedCodec {
    fn decode(&self, input: &mut dyn BufRead) -> io::Result<Vec<Record>> {
        let mut records = Vec::new();
        for line in input.lines() {
            let line = line?;
            records.push(
                line.split(self.separator.as_str())
                    .map(str::to_string)
                    .collect(),
            );
        }
        Ok(records)
    }

    fn encode(&self, table: &Table, output: &mut dyn Write) -> io::Result<()> {
        if !table.headers().is_empty() {
            self.write_line(output, table.headers())?;
        }
        for row in table {
            self.write_line(output, row.items())?;
        }
        Ok(())
    }
}
