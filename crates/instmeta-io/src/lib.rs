//! File surfaces for instmeta: the dimension table going in and the
//! generated file coming out.

pub mod emit;
pub mod table;

pub use emit::{EmitError, header, render_generated_file, write_generated_file, write_lists};
pub use table::{
    ReadMode, SkippedLine, TableError, TableReport, parse_row, read_rows, read_rows_from_path,
};
