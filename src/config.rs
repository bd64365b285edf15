//! Configuration for reading and writing delimited files

use crate::error::{Result, TableError};

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: &str = ",";

/// Line terminator written after each record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` everywhere else
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    /// The terminator as text
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl std::str::FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(LineEnding::Native),
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            _ => Err(format!("Unknown line ending: {}", s)),
        }
    }
}

/// Options for [`Table::read_with`](crate::Table::read_with) and
/// [`Table::write_with`](crate::Table::write_with)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text placed between cells; may be longer than one character
    pub separator: String,
    /// Terminator written after each record
    pub line_ending: LineEnding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

impl Config {
    /// Create a config with the given separator
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Default::default()
        }
    }

    /// Set the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the line terminator used when writing
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Reject configurations no codec can honour
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(TableError::InvalidArgument("separator must not be empty"));
        }
        Ok(())
    }
}
