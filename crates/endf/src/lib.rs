//! Low-level decoder for ENDF-6 nuclear data tapes
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod content;
mod error;
mod layout;
mod parsers;
mod reader;
mod record;
mod section;
mod table;
mod tape;
mod writer;

#[cfg(test)]
mod test_utils;

// Inline anything important for a nice public API
#[doc(inline)]
pub use layout::{ColumnLayout, FIELD_WIDTH, LAYOUT, LINE_WIDTH};

#[doc(inline)]
pub use parsers::read_float;

#[doc(inline)]
pub use record::{read_line, sequence_number, Record};

#[doc(inline)]
pub use section::{find_file, find_section, locate_file, locate_section};

#[doc(inline)]
pub use table::{read_table, TabHeader, Table};

#[doc(inline)]
pub use content::{describe_file, list_content, Content};

#[doc(inline)]
pub use tape::Tape;

#[doc(inline)]
pub use reader::{read_tape, Reader};

#[doc(inline)]
pub use writer::{write_ascii, write_json};

#[doc(inline)]
pub use error::{Error, Result};
