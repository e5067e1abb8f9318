//! Decoding of single lines into numeric records

// standard library
use std::ops::Index;

// crate modules
use crate::error::Result;
use crate::layout::LAYOUT;
use crate::parsers::{integer, read_float};

// external crates
use serde::Serialize;

/// Six values decoded from the content region of one line
///
/// Records are cheap to produce and are never stored on the tape, just decoded
/// on demand with [read_line()].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Record(pub [f64; 6]);

impl Record {
    /// Reference to all six values, left to right
    pub fn values(&self) -> &[f64; 6] {
        &self.0
    }

    /// The values taken as (x, y) pairs in field order (0,1), (2,3), (4,5)
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.chunks_exact(2).map(|p| (p[0], p[1]))
    }
}

impl Index<usize> for Record {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Decode the six data fields of a line
///
/// Each 11-character field is converted with [read_float()](crate::read_float).
/// A field that fails to parse is reported along with the sequence number of
/// the line, if there is one.
///
/// ```rust
/// # use endftools_endf::read_line;
/// let line = format!("{:<66}{:>4}{:>2}{:>3}{:>5}", " 1.001000+3 9.991673-1", 125, 3, 1, 1);
/// let record = read_line(&line).unwrap();
/// assert_eq!(record.values(), &[1001.0, 0.9991673, 0.0, 0.0, 0.0, 0.0]);
/// ```
pub fn read_line(line: &str) -> Result<Record> {
    let fields = LAYOUT.data_fields(line)?;

    let mut values = [0.0; 6];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = read_float(field).map_err(|e| e.at_sequence(sequence_number(line)))?;
    }

    Ok(Record(values))
}

/// Sequence number in the last five columns, if present and readable
pub fn sequence_number(line: &str) -> Option<u32> {
    let text = LAYOUT.slice(line, &LAYOUT.sequence).ok()?;
    let (_, n) = integer(text).ok()?;
    u32::try_from(n).ok()
}
