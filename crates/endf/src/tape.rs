// standard library
use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

// crate modules
use crate::content::{list_content, Content};
use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::section::{find_file, find_section, locate_section};
use crate::table::{read_table, Table};

// external crates
use log::debug;
use rayon::prelude::*;

/// An ENDF-6 tape held in memory
///
/// The [Tape] owns every 80 column line of the file and is never modified once
/// read. Everything else in the crate works on borrowed slices of these lines.
///
/// For example, to get the elastic scattering cross section of H-1:
///
/// ```rust, no_run
/// # use endftools_endf::Tape;
/// let tape = Tape::from_file("path/to/n-001_H_001.endf").unwrap();
///
/// // MF=3 holds cross sections, MT=2 is elastic scattering
/// let table = tape.get_table(3, 2).unwrap();
///
/// for (energy, sigma) in table.points() {
///     println!("{energy:e} eV  {sigma:e} b");
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tape {
    lines: Vec<String>,
}

impl Tape {
    /// Wrap lines that are already known to be 80 columns wide
    pub(crate) fn from_checked_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Create a [Tape] from a list of lines
    ///
    /// Every line must be exactly 80 columns wide. Use a [Reader] for more
    /// lenient loading.
    pub fn new(lines: Vec<String>) -> Result<Self> {
        Reader::new().read_lines(lines)
    }

    /// Read a tape from the file at `path`
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Reader::new().read_file(path)
    }

    /// All lines on the tape
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines on the tape
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the tape holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines belonging to file `mf`
    ///
    /// See [locate_file()](crate::locate_file) for the search rules.
    pub fn find_file(&self, mf: u32) -> Result<&[String]> {
        find_file(&self.lines, mf)
    }

    /// Lines belonging to section `mt` of file `mf`
    ///
    /// See [locate_section()](crate::locate_section) for the search rules.
    pub fn find_section(&self, mf: u32, mt: u32) -> Result<&[String]> {
        find_section(&self.lines, mf, mt)
    }

    /// Tabulated function held in section `mt` of file `mf`
    ///
    /// The located section ends with the last line carrying the MT number, so
    /// the SEND line that follows it is included before the lines are passed
    /// to [read_table()](crate::read_table).
    pub fn get_table(&self, mf: u32, mt: u32) -> Result<Table> {
        let range = locate_section(&self.lines, mf, mt)?;
        let end = (range.end + 1).min(self.lines.len());
        debug!("Reading table for MF={mf} MT={mt}");
        read_table(&self.lines[range.start..end])
    }

    /// Tabulated functions for several (MF, MT) targets at once
    ///
    /// Targets are read in parallel and returned in the order requested. The
    /// first failure is returned if any target cannot be read.
    pub fn tables(&self, targets: &[(u32, u32)]) -> Result<Vec<Table>> {
        targets
            .par_iter()
            .map(|(mf, mt)| self.get_table(*mf, *mt))
            .collect()
    }

    /// Every distinct (MAT, MF, MT) on the tape, excluding delimiters
    pub fn content(&self) -> Result<BTreeSet<Content>> {
        list_content(&self.lines)
    }

    /// Every distinct material on the tape
    pub fn materials(&self) -> Result<BTreeSet<i32>> {
        Ok(self.content()?.iter().map(|c| c.mat).collect())
    }
}

impl FromStr for Tape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Reader::new().read_str(s)
    }
}
