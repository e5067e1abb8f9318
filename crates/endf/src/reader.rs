//! Loading of ENDF-6 tapes into memory
//!
//! The whole tape is read at once and every line is checked for the fixed
//! 80 column width before anything is decoded.
//!
//! ```rust, no_run
//! # use endftools_endf::{read_tape, Reader};
//! // Read a tape with the default options
//! let tape = read_tape("/path/to/tape.endf").unwrap();
//!
//! // Or pad any trimmed lines out to 80 columns
//! let mut reader = Reader::new();
//! reader.set_strict(false);
//! let tape = reader.read_file("/path/to/tape.endf").unwrap();
//! ```

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::layout::LINE_WIDTH;
use crate::tape::Tape;

// external crates
use log::{info, warn};

/// Read the tape at `path` with the default [Reader] options
pub fn read_tape<P: AsRef<Path>>(path: P) -> Result<Tape> {
    Reader::new().read_file(path)
}

/// Configurable loader for a [Tape]
///
/// By default the reader is strict and rejects any line that is not exactly
/// 80 columns wide. Some tools strip trailing blanks from the sequence number
/// columns, so relaxing this pads short lines back out to the full width.
/// Lines that are too long are always an error.
#[derive(Debug)]
pub struct Reader {
    strict: bool,
}

impl Default for Reader {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl Reader {
    /// Create a new reader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject (`true`) or pad (`false`) lines shorter than 80 columns
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Read every line of the file at `path`
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Tape> {
        info!("Reading {}", path.as_ref().display());
        let reader = BufReader::new(File::open(path)?);

        let mut lines = Vec::new();
        for (n, line) in reader.lines().enumerate() {
            lines.push(self.check_width(n, line?)?);
        }

        Ok(Tape::from_checked_lines(lines))
    }

    /// Read every line of a string
    pub fn read_str(&self, s: &str) -> Result<Tape> {
        self.read_lines(s.lines().map(String::from))
    }

    /// Collect lines from any source into a [Tape]
    pub fn read_lines<I: IntoIterator<Item = String>>(&self, lines: I) -> Result<Tape> {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(n, line)| self.check_width(n, line))
            .collect::<Result<Vec<String>>>()?;

        Ok(Tape::from_checked_lines(lines))
    }

    /// Enforce the 80 column width of line `n`
    fn check_width(&self, n: usize, mut line: String) -> Result<String> {
        if line.ends_with('\r') {
            line.pop();
        }

        let found = line.len();
        if found == LINE_WIDTH {
            Ok(line)
        } else if found < LINE_WIDTH && !self.strict {
            warn!("Padding line {n} from {found} to {LINE_WIDTH} columns");
            line.push_str(&" ".repeat(LINE_WIDTH - found));
            Ok(line)
        } else {
            Err(Error::InvalidLineLength { line: n, found })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::control;

    #[test]
    fn strict_widths() {
        let reader = Reader::new();
        let full = control(125, 3, 1);
        assert_eq!(reader.read_lines([full.clone()]).unwrap().len(), 1);

        let short = full[..79].to_string();
        assert!(matches!(
            reader.read_lines([full.clone(), short]),
            Err(Error::InvalidLineLength { line: 1, found: 79 })
        ));

        let long = format!("{full} ");
        assert!(matches!(
            reader.read_lines([long]),
            Err(Error::InvalidLineLength { line: 0, found: 81 })
        ));
    }

    #[test]
    fn lenient_padding() {
        let mut reader = Reader::new();
        reader.set_strict(false);

        let full = control(125, 3, 1);
        let tape = reader.read_lines([full[..75].to_string()]).unwrap();
        assert_eq!(tape.lines()[0], format!("{}     ", &full[..75]));

        assert!(reader.read_lines([format!("{full}  ")]).is_err());
    }

    #[test]
    fn carriage_returns() {
        let full = control(125, 3, 1);
        let text = format!("{full}\r\n{full}\r\n");
        let tape = Reader::new().read_str(&text).unwrap();
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.lines()[1], full);

        let tape = Reader::new().read_lines([format!("{full}\r")]).unwrap();
        assert_eq!(tape.lines()[0], full);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_tape("./does/not/exist.endf"),
            Err(Error::IOError(_))
        ));
    }
}
