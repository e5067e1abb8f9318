//! Builders for synthetic 80 column lines used in unit tests

/// Build a line from six data fields and the control identifiers
pub(crate) fn line(fields: [&str; 6], mat: i32, mf: u32, mt: u32, sequence: u32) -> String {
    let content: String = fields.iter().map(|f| format!("{f:>11}")).collect();
    format!("{content}{mat:>4}{mf:>2}{mt:>3}{sequence:>5}")
}

/// Build a line with blank data fields, as used for delimiters
pub(crate) fn control(mat: i32, mf: u32, mt: u32) -> String {
    line(["", "", "", "", "", ""], mat, mf, mt, 0)
}
