//! Reading and writing tables as delimited text files

mod delimited;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{Result, TableError};
use crate::model::Table;

pub use self::delimited::DelimitedCodec;

/// One decoded line: the cells between separators
pub type Record = Vec<String>;

/// Trait for converting between tables and delimited text
pub trait Codec {
    /// Decode every line of `input` into a record
    fn decode(&self, input: &mut dyn BufRead) -> io::Result<Vec<Record>>;

    /// Encode the headers (when present) and then every row
    fn encode(&self, table: &Table, output: &mut dyn Write) -> io::Result<()>;
}

/// Build the codec for a configuration, rejecting an empty separator
pub fn codec_for(config: &Config) -> Result<Box<dyn Codec>> {
    config.validate()?;
    trace!(
        separator = %config.separator,
        line_ending = ?config.line_ending,
        "building codec"
    );
    Ok(Box::new(DelimitedCodec::new(
        config.separator.clone(),
        config.line_ending,
    )))
}

fn check_filename(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(TableError::InvalidArgument("undefined filename"));
    }
    Ok(())
}

impl Table {
    /// Read `path` using the default `,` separator. See [`Table::read_with`].
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_with(path, &Config::default())
    }

    /// Read a delimited file into this table.
    ///
    /// The first line replaces the headers and every later line is appended
    /// as a row; a blank line becomes a row with one empty cell. An empty
    /// file clears the headers and adds nothing. The whole file is decoded
    /// before the table is touched.
    pub fn read_with(&mut self, path: impl AsRef<Path>, config: &Config) -> Result<()> {
        let path = path.as_ref();
        check_filename(path)?;
        let codec = codec_for(config)?;

        let records = {
            let file = File::open(path).map_err(|e| TableError::io(path, e))?;
            let mut reader = BufReader::new(file);
            codec
                .decode(&mut reader)
                .map_err(|e| TableError::io(path, e))?
        };

        let mut records = records.into_iter();
        self.set_headers(records.next().unwrap_or_default());
        let added = records.len();
        self.add_rows(records)?;

        debug!(
            path = %path.display(),
            separator = %config.separator,
            headers = self.headers().len(),
            rows = added,
            "read table"
        );
        Ok(())
    }

    /// Write to `path` using the default configuration. See [`Table::write_with`].
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_with(path, &Config::default())
    }

    /// Create or truncate `path` and write the headers (if any) followed by
    /// one line per row.
    pub fn write_with(&self, path: impl AsRef<Path>, config: &Config) -> Result<()> {
        let path = path.as_ref();
        check_filename(path)?;
        let codec = codec_for(config)?;

        let file = File::create(path).map_err(|e| TableError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        codec
            .encode(self, &mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| TableError::io(path, e))?;

        debug!(
            path = %path.display(),
            separator = %config.separator,
            headers = self.headers().len(),
            rows = self.len(),
            "wrote table"
        );
        Ok(())
    }
}
