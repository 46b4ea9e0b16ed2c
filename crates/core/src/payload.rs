//! Encoded payload records.
//!
//! # Record Format
//!
//! ```text
//! +-----------------------+
//! | ENCRYPTED | PLAIN     |  header line
//! +-----------------------+
//! | body                  |  bit-string, optionally XOR-transformed;
//! | (any number of lines) |  lines are joined without separators
//! +-----------------------+
//! ```
//!
//! The record carries no frequency table; that lives in its own record.

use crate::error::{PayloadError, Result};
use std::fmt;

pub const ENCRYPTED_HEADER: &str = "ENCRYPTED";
pub const PLAIN_HEADER: &str = "PLAIN";

/// Whether the body went through the XOR cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    Encrypted,
    Plain,
}

impl PayloadMode {
    pub fn header(self) -> &'static str {
        match self {
            PayloadMode::Encrypted => ENCRYPTED_HEADER,
            PayloadMode::Plain => PLAIN_HEADER,
        }
    }

    pub fn is_encrypted(self) -> bool {
        self == PayloadMode::Encrypted
    }
}

impl fmt::Display for PayloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A parsed payload record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadRecord {
    pub mode: PayloadMode,
    pub body: String,
}

impl PayloadRecord {
    pub fn new(mode: PayloadMode, body: impl Into<String>) -> Self {
        Self {
            mode,
            body: body.into(),
        }
    }

    /// Render as `"<HEADER>\n<body>"` with no trailing newline.
    ///
    /// # Errors
    /// `PayloadError::LineBreakInBody` if the body contains `'\n'` or `'\r'`:
    /// the reader joins lines without separators, so such a body would not
    /// come back intact. This only happens when a cipher key maps a bit onto
    /// a line break.
    pub fn render(&self) -> Result<String> {
        if let Some(position) = self.body.chars().position(|c| c == '\n' || c == '\r') {
            return Err(PayloadError::LineBreakInBody { position }.into());
        }

        let mut out = String::with_capacity(self.mode.header().len() + 1 + self.body.len());
        out.push_str(self.mode.header());
        out.push('\n');
        out.push_str(&self.body);
        Ok(out)
    }

    /// Parse a record.
    ///
    /// # Errors
    /// - `PayloadError::MissingHeader` on an empty record
    /// - `PayloadError::UnknownHeader` if the first line is not a known header
    pub fn parse(record: &str) -> Result<Self> {
        let mut lines = record.lines();
        let header = lines.next().ok_or(PayloadError::MissingHeader)?;
        let mode = match header {
            ENCRYPTED_HEADER => PayloadMode::Encrypted,
            PLAIN_HEADER => PayloadMode::Plain,
            other => return Err(PayloadError::UnknownHeader(other.to_string()).into()),
        };
        let body: String = lines.collect();
        Ok(Self { mode, body })
    }
}
