//! Locating files and sections within a sequence of lines
//!
//! A search compares the identifier columns of each line against the exact
//! fixed-width text of the target, so MF=3 is matched as `" 3"` in columns
//! 70-72 and MF=3, MT=1 as `" 3  1"` in columns 70-75.
//!
//! The result runs from the first matching line through the last matching line,
//! whatever lies in between.
//!
//! Note that the material (MAT) is never part of the key. On a tape holding
//! more than one material a file search can therefore span lines from several
//! materials, so narrow the lines down to a single material first.

// standard library
use std::ops::Range;

// crate modules
use crate::error::{Error, Result};
use crate::layout::LAYOUT;

// external crates
use log::debug;

/// Find the range of lines belonging to file `mf`
///
/// Fails with [Error::SectionNotFound] if no line carries the file identifier.
pub fn locate_file<S: AsRef<str>>(lines: &[S], mf: u32) -> Result<Range<usize>> {
    let key = format!("{mf:>2}");
    let range = locate(lines, &LAYOUT.mf, &key).ok_or(Error::SectionNotFound { mf, mt: None })?;
    debug!("Found MF={mf} on lines {range:?}");
    Ok(range)
}

/// Find the range of lines belonging to section `mt` of file `mf`
///
/// Fails with [Error::SectionNotFound] if no line carries both identifiers.
pub fn locate_section<S: AsRef<str>>(lines: &[S], mf: u32, mt: u32) -> Result<Range<usize>> {
    let key = format!("{mf:>2}{mt:>3}");
    let range = locate(lines, &LAYOUT.mf_mt, &key).ok_or(Error::SectionNotFound {
        mf,
        mt: Some(mt),
    })?;
    debug!("Found MF={mf} MT={mt} on lines {range:?}");
    Ok(range)
}

/// Sub-slice of the lines belonging to file `mf`
///
/// See [locate_file()] for details.
pub fn find_file<S: AsRef<str>>(lines: &[S], mf: u32) -> Result<&[S]> {
    Ok(&lines[locate_file(lines, mf)?])
}

/// Sub-slice of the lines belonging to section `mt` of file `mf`
///
/// See [locate_section()] for details.
pub fn find_section<S: AsRef<str>>(lines: &[S], mf: u32, mt: u32) -> Result<&[S]> {
    Ok(&lines[locate_section(lines, mf, mt)?])
}

/// First to last line with `key` in the given columns
fn locate<S: AsRef<str>>(lines: &[S], columns: &Range<usize>, key: &str) -> Option<Range<usize>> {
    let matches = |line: &S| line.as_ref().get(columns.clone()) == Some(key);
    let first = lines.iter().position(matches)?;
    let last = lines.iter().rposition(matches)?;
    Some(first..last + 1)
}
