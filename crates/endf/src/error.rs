//! Result and Error types for the ENDF decoder

/// Type alias for `Result<T, endf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `endftools-endf`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Field could not be read as a number, even with the exponent repaired
    #[error("unable to parse \"{text}\" as a number ({})", line_hint(.sequence))]
    MalformedNumber {
        text: String,
        sequence: Option<u32>,
    },

    /// No line carries the requested identifiers
    #[error("no lines found for {}", target_hint(.mf, .mt))]
    SectionNotFound { mf: u32, mt: Option<u32> },

    /// Fewer (x, y) pairs than the declared number of points
    #[error("truncated table (expected {expected:?} points, found {found:?})")]
    TruncatedTable { expected: usize, found: usize },

    /// Not enough lines for the TAB1 header layout
    #[error("incomplete section (expected at least {expected:?} lines, found {found:?})")]
    IncompleteSection { expected: usize, found: usize },

    /// A count such as NR or NP that is not a whole, non-negative number
    #[error("invalid {name} count {value:?}")]
    InvalidCount { name: &'static str, value: f64 },

    /// A MAT, MF, or MT field that is not an integer
    #[error("invalid {field} identifier \"{text}\"")]
    InvalidIdentifier { field: &'static str, text: String },

    /// Line on a tape that is not exactly 80 columns wide
    #[error("line {line:?} is {found:?} columns wide (expected 80)")]
    InvalidLineLength { line: usize, found: usize },

    /// Line too short to hold the requested columns
    #[error("line too short (expected at least {expected:?} columns, found {found:?})")]
    LineTooShort { expected: usize, found: usize },
}

impl Error {
    /// Attach a line sequence number to a number parsing failure
    pub(crate) fn at_sequence(self, sequence: Option<u32>) -> Self {
        match self {
            Self::MalformedNumber { text, .. } => Self::MalformedNumber { text, sequence },
            other => other,
        }
    }
}

fn line_hint(sequence: &Option<u32>) -> String {
    match sequence {
        Some(n) => format!("line {n}"),
        None => "unknown line".to_string(),
    }
}

fn target_hint(mf: &u32, mt: &Option<u32>) -> String {
    match mt {
        Some(mt) => format!("MF={mf} MT={mt}"),
        None => format!("MF={mf}"),
    }
}
