//! Address trace parsing.
//!
//! An address trace is a text source with one decimal virtual address per line.
//! A record is read as its leading decimal digits; leading whitespace and anything
//! after the digits are ignored, so `\n` and `\r\n` endings both work. Blank lines are skipped without being counted as records.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::error::{RecordError, Result, SimError};
use crate::common::VirtAddr;

/// Parses one address record.
///
/// # Errors
///
/// [`RecordError::MalformedRecord`] if the record does not start with a decimal
/// digit after optional whitespace, and
/// [`RecordError::AddressOutOfRange`] if the number exceeds 65535.
///
/// # Examples
///
/// ```
/// use vmsim_core::sim::trace::parse_address;
///
/// assert_eq!(parse_address("16916\r\n").unwrap().val(), 16916);
/// assert_eq!(parse_address("12abc").unwrap().val(), 12);
/// assert!(parse_address("abc").is_err());
/// assert!(parse_address("70000").is_err());
/// ```
pub fn parse_address(record: &str) -> std::result::Result<VirtAddr, RecordError> {
    let trimmed = record.trim_start();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(RecordError::MalformedRecord(record.trim().to_owned()));
    }

    // Saturate so absurdly long numbers still report as out of range.
    let value = trimmed.as_bytes()[..digits].iter().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    VirtAddr::try_from(value)
}

/// Iterator over the addresses of a trace.
///
/// Record errors carry the 1-based line number and are recoverable; I/O errors
/// are not.
#[derive(Debug)]
pub struct AddressTrace<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl AddressTrace<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> AddressTrace<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines consumed so far.
    pub const fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for AddressTrace<R> {
    type Item = Result<VirtAddr>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let record: Cow<'_, str> = String::from_utf8_lossy(&self.buf);
                    if record.trim().is_empty() {
                        continue;
                    }
                    let line = self.line;
                    return Some(
                        parse_address(&record).map_err(|source| SimError::Record { line, source }),
                    );
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
