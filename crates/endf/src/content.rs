//! Summary of the materials, files, and sections on a tape

// standard library
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::ops::Range;

// crate modules
use crate::error::{Error, Result};
use crate::layout::LAYOUT;
use crate::parsers::integer;

// external crates
use serde::Serialize;

/// Identifiers of one section on a tape
///
/// The material is signed because the tape end record (TEND) is written with
/// MAT=-1. Any triple with a zero in it marks the end of a section, file, or
/// material rather than real content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Content {
    /// Material identifier
    pub mat: i32,
    /// File identifier
    pub mf: i32,
    /// Section identifier
    pub mt: i32,
}

impl Content {
    /// Read the MAT, MF, and MT identifiers of a line
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(Self {
            mat: identifier("MAT", line, &LAYOUT.mat)?,
            mf: identifier("MF", line, &LAYOUT.mf)?,
            mt: identifier("MT", line, &LAYOUT.mt)?,
        })
    }

    /// True for SEND, FEND, MEND, TEND, and TPID lines
    pub fn is_delimiter(&self) -> bool {
        self.mat == 0 || self.mf == 0 || self.mt == 0
    }

    /// Short description of the kind of data in this file
    pub fn description(&self) -> Option<&'static str> {
        describe_file(self.mf)
    }
}

impl Display for Content {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "MAT={} MF={} MT={}", self.mat, self.mf, self.mt)
    }
}

/// Set of every distinct (MAT, MF, MT) on a tape
///
/// Delimiter lines are left out. The set is ordered by material, then file,
/// then section.
///
/// ```rust
/// # use endftools_endf::{list_content, Content};
/// let lines: Vec<String> = [(125, 0, 0), (125, 3, 1), (125, 3, 1), (125, 1, 451)]
///     .iter()
///     .map(|(mat, mf, mt)| format!("{:66}{mat:>4}{mf:>2}{mt:>3}{:>5}", "", 1))
///     .collect();
///
/// let content = list_content(&lines).unwrap();
/// assert_eq!(content.len(), 2);
/// assert!(content.contains(&Content { mat: 125, mf: 3, mt: 1 }));
/// ```
pub fn list_content<S: AsRef<str>>(lines: &[S]) -> Result<BTreeSet<Content>> {
    let mut content = BTreeSet::new();
    for line in lines {
        let c = Content::from_line(line.as_ref())?;
        if !c.is_delimiter() {
            content.insert(c);
        }
    }
    Ok(content)
}

/// Category of data held in a file
///
/// ```rust
/// # use endftools_endf::describe_file;
/// assert_eq!(describe_file(3), Some("reaction cross sections"));
/// assert_eq!(describe_file(11), None);
/// ```
pub fn describe_file(mf: i32) -> Option<&'static str> {
    let description = match mf {
        1 => "descriptive and miscellaneous data",
        2 => "resonance parameter data",
        3 => "reaction cross sections",
        4 => "angular distributions",
        5 => "energy distributions",
        6 => "energy-angle distributions",
        7 => "thermal scattering data",
        8 => "radioactivity data",
        9 | 10 => "nuclide production data",
        12..=15 => "photon production data",
        30..=36 => "covariance data",
        _ => return None,
    };
    Some(description)
}

fn identifier(field: &'static str, line: &str, columns: &Range<usize>) -> Result<i32> {
    let text = LAYOUT.slice(line, columns)?;
    integer(text)
        .map(|(_, value)| value)
        .map_err(|_| Error::InvalidIdentifier {
            field,
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{control, line};

    fn tape() -> Vec<String> {
        vec![
            control(125, 0, 0),
            line(["1.0", "", "", "", "", ""], 125, 3, 1, 1),
            line(["2.0", "", "", "", "", ""], 125, 3, 1, 2),
            line(["3.0", "", "", "", "", ""], 125, 1, 451, 1),
        ]
    }

    #[test]
    fn delimiters_removed_and_duplicates_collapse() {
        let content = list_content(&tape()).unwrap();
        let expected = BTreeSet::from([
            Content { mat: 125, mf: 3, mt: 1 },
            Content { mat: 125, mf: 1, mt: 451 },
        ]);
        assert_eq!(content, expected);
    }

    #[test]
    fn repeated_calls_agree() {
        let lines = tape();
        assert_eq!(list_content(&lines).unwrap(), list_content(&lines).unwrap());
    }

    #[test]
    fn ordered_by_identifiers() {
        let content: Vec<Content> = list_content(&tape()).unwrap().into_iter().collect();
        assert_eq!(content[0].mf, 1);
        assert_eq!(content[1].mf, 3);
    }

    #[test]
    fn structural_lines() {
        for (mat, mf, mt) in [(125, 3, 0), (125, 0, 0), (0, 0, 0), (-1, 0, 0), (1, 0, 0)] {
            assert!(Content::from_line(&control(mat, mf, mt)).unwrap().is_delimiter());
        }
        assert!(!Content::from_line(&control(125, 3, 1)).unwrap().is_delimiter());
    }

    #[test]
    fn invalid_identifier() {
        let mut text = control(125, 3, 1);
        text.replace_range(70..72, "xx");
        assert!(matches!(
            list_content(&[text]),
            Err(Error::InvalidIdentifier { field: "MF", .. })
        ));
    }

    #[test]
    fn descriptions() {
        let c = Content { mat: 125, mf: 33, mt: 1 };
        assert_eq!(c.description(), Some("covariance data"));
        assert_eq!(c.to_string(), "MAT=125 MF=33 MT=1");
    }
}
