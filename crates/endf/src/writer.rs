//! Write operations for extracted tables

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::table::Table;

/// Write a [Table] to a two column ascii text file
///
/// The header values are written as comment lines starting with `#`, followed
/// by one `x y` pair per line in scientific notation. This is convenient for
/// plotting tools and spreadsheets.
///
/// ```rust, no_run
/// # use endftools_endf::{read_tape, write_ascii};
/// let tape = read_tape("/path/to/tape.endf").unwrap();
/// let table = tape.get_table(3, 1).unwrap();
///
/// // Write the total cross section as plain columns
/// write_ascii(&table, "./mt1.txt").unwrap();
/// ```
pub fn write_ascii<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    let header = &table.header;
    writeln!(writer, "# c1 = {:e}, c2 = {:e}", header.c1, header.c2)?;
    writeln!(writer, "# l1 = {}, l2 = {}", header.l1, header.l2)?;
    writeln!(writer, "# nr = {}, np = {}", header.nr, header.np)?;

    for (x, y) in table.points() {
        writeln!(writer, "{x:.6e} {y:.6e}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a [Table] to a JSON file
///
/// This is a direct serialization of the header values and the x and y lists.
///
/// ```rust, no_run
/// # use endftools_endf::{read_tape, write_json};
/// let tape = read_tape("/path/to/tape.endf").unwrap();
/// let table = tape.get_table(3, 102).unwrap();
///
/// // Write the capture cross section for use elsewhere
/// write_json(&table, "./mt102.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;
    serde_json::to_writer_pretty(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TabHeader;

    fn table() -> Table {
        Table {
            header: TabHeader {
                nr: 1,
                np: 2,
                ..Default::default()
            },
            x: vec![1.0e-5, 2.0e7],
            y: vec![37.14755, 0.48382],
        }
    }

    #[test]
    fn ascii_columns() {
        let path = std::env::temp_dir().join("endftools_writer_ascii.txt");
        write_ascii(&table(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows, vec!["1.000000e-5 3.714755e1", "2.000000e7 4.838200e-1"]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn json_round_trip_values() {
        let path = std::env::temp_dir().join("endftools_writer_json.json");
        write_json(&table(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["header"]["np"], 2);
        assert_eq!(value["x"][1], 2.0e7);
        assert_eq!(value["y"][0], 37.14755);
        std::fs::remove_file(path).unwrap();
    }
}
