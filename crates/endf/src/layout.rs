//! Fixed column layout of an ENDF-6 line
//!
//! Every line on a tape is 80 columns wide and every logical field is found by
//! byte offset rather than by splitting on whitespace.
//!
//! ```text
//! [ 0..11 ][11..22 ][22..33 ][33..44 ][44..55 ][55..66 ][MAT][MF][ MT][ NS  ]
//!  field 0  field 1  field 2  field 3  field 4  field 5  66-70 70-72 72-75 75-80
//! ```

// standard library
use std::ops::Range;

// crate modules
use crate::error::{Error, Result};

/// Width of every line on a tape
pub const LINE_WIDTH: usize = 80;

/// Width of one numeric data field
pub const FIELD_WIDTH: usize = 11;

/// Byte offsets of the logical fields in a line
///
/// There is only ever one of these, the [LAYOUT] table.
#[derive(Debug)]
pub struct ColumnLayout {
    /// All six data fields
    pub content: Range<usize>,
    /// The six data fields, left to right
    pub data: [Range<usize>; 6],
    /// Material identifier
    pub mat: Range<usize>,
    /// File identifier
    pub mf: Range<usize>,
    /// Section identifier
    pub mt: Range<usize>,
    /// File and section identifiers together
    pub mf_mt: Range<usize>,
    /// Line sequence number
    pub sequence: Range<usize>,
}

/// Column layout shared by every line of every tape
pub static LAYOUT: ColumnLayout = ColumnLayout {
    content: 0..66,
    data: [0..11, 11..22, 22..33, 33..44, 44..55, 55..66],
    mat: 66..70,
    mf: 70..72,
    mt: 72..75,
    mf_mt: 70..75,
    sequence: 75..80,
};

impl ColumnLayout {
    /// Slice a set of columns out of a line
    ///
    /// Fails with [Error::LineTooShort] if the line ends before the columns do.
    pub fn slice<'a>(&self, line: &'a str, columns: &Range<usize>) -> Result<&'a str> {
        line.get(columns.clone()).ok_or(Error::LineTooShort {
            expected: columns.end,
            found: line.len(),
        })
    }

    /// The six 11-character data fields of a line, left to right
    pub fn data_fields<'a>(&self, line: &'a str) -> Result<[&'a str; 6]> {
        let mut fields = [""; 6];
        for (field, columns) in fields.iter_mut().zip(&self.data) {
            *field = self.slice(line, columns)?;
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_fields_are_contiguous() {
        assert_eq!(LAYOUT.data[0].start, LAYOUT.content.start);
        assert_eq!(LAYOUT.data[5].end, LAYOUT.content.end);
        for pair in LAYOUT.data.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_eq!(pair[0].len(), FIELD_WIDTH);
        }
        assert_eq!(LAYOUT.sequence.end, LINE_WIDTH);
    }

    #[test]
    fn slice_short_line() {
        let line = "x".repeat(70);
        assert_eq!(LAYOUT.slice(&line, &LAYOUT.mat).unwrap(), "xxxx");
        assert!(matches!(
            LAYOUT.slice(&line, &LAYOUT.mf),
            Err(Error::LineTooShort {
                expected: 72,
                found: 70
            })
        ));
    }
}
