//! Extraction of tabulated functions from TAB1 sections
//!
//! A section holding a single TAB1 record is laid out as
//!
//! ```text
//! [MAT, MF, MT/ ZA, AWR, L1, L2, N1, N2]           HEAD
//! [MAT, MF, MT/ C1, C2, L1, L2, NR, NP]            TAB1 control
//! [MAT, MF, MT/ NBT(1), INT(1), NBT(2), INT(2)...] interpolation regions
//! [MAT, MF, MT/ x(1), y(1), x(2), y(2), x(3), y(3)]
//! [MAT, MF, MT/ x(4), y(4), ...                   ]
//! [MAT, MF, 0/  0.0, 0.0, 0, 0, 0, 0]              SEND
//! ```
//!
//! The interpolation regions are not interpreted. Every point is read as though
//! the whole table follows one interpolation law.

// standard library
use std::fmt::{Display, Formatter};

// crate modules
use crate::error::{Error, Result};
use crate::record::{read_line, Record};

// external crates
use log::{debug, warn};
use serde::Serialize;

/// Control values from the second line of a TAB1 section
///
/// For cross sections in MF=3 the floats are the mass-difference and reaction
/// Q-values (QM, QI) and `l2` is the complex breakup flag (LR).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TabHeader {
    /// First float, e.g. QM
    pub c1: f64,
    /// Second float, e.g. QI
    pub c2: f64,
    /// First integer flag
    pub l1: i64,
    /// Second integer flag, e.g. LR
    pub l2: i64,
    /// Number of interpolation regions
    pub nr: usize,
    /// Number of points
    pub np: usize,
}

impl TryFrom<Record> for TabHeader {
    type Error = Error;

    fn try_from(record: Record) -> Result<Self> {
        Ok(Self {
            c1: record[0],
            c2: record[1],
            l1: record[2] as i64,
            l2: record[3] as i64,
            nr: count("NR", record[4])?,
            np: count("NP", record[5])?,
        })
    }
}

/// Tabulated function y(x)
///
/// Both `x` and `y` always hold exactly `header.np` values, in the order they
/// appear on the tape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// TAB1 control values
    pub header: TabHeader,
    /// Independent variable, e.g. incident energy
    pub x: Vec<f64>,
    /// Dependent variable, e.g. cross section
    pub y: Vec<f64>,
}

impl Table {
    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the table has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over (x, y) points
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "Table {{ nr: {}, np: {} }}", self.header.nr, self.header.np)?;
        for (x, y) in self.points() {
            writeln!(f, "{x:>14.6e} {y:>14.6e}")?;
        }
        Ok(())
    }
}

/// Extract the tabulated (x, y) function from the lines of a section
///
/// The `lines` are expected to run from the HEAD record through to the trailing
/// SEND delimiter. Data lines are decoded as three (x, y) pairs each and the
/// result is cut to the declared number of points, discarding any filler in the
/// last line.
///
/// Fails with [Error::TruncatedTable] if the data lines hold fewer points than
/// declared.
pub fn read_table<S: AsRef<str>>(lines: &[S]) -> Result<Table> {
    if lines.len() < 4 {
        return Err(Error::IncompleteSection {
            expected: 4,
            found: lines.len(),
        });
    }

    let header = TabHeader::try_from(read_line(lines[1].as_ref())?)?;
    if header.nr > 1 {
        warn!(
            "{} interpolation regions read as a single region",
            header.nr
        );
    }

    let data = &lines[3..lines.len() - 1];
    let mut x = Vec::with_capacity(3 * data.len());
    let mut y = Vec::with_capacity(3 * data.len());
    for line in data {
        for (a, b) in read_line(line.as_ref())?.pairs() {
            x.push(a);
            y.push(b);
        }
    }

    if x.len() < header.np {
        return Err(Error::TruncatedTable {
            expected: header.np,
            found: x.len(),
        });
    }

    x.truncate(header.np);
    y.truncate(header.np);
    debug!("Table read with {} points from {} lines", header.np, data.len());

    Ok(Table { header, x, y })
}

/// Counts are written as floats but must be whole and non-negative
fn count(name: &'static str, value: f64) -> Result<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(Error::InvalidCount { name, value })
    }
}
