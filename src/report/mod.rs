// src/report/mod.rs
// =============================================================================
// Output side of a run.
//
// Submodules:
// - assemble: turns analysis + validation results into a Report
// - csv_io: reads the input CSV and writes the cleaned/error CSV files
// =============================================================================

mod assemble;
mod csv_io;

pub use assemble::assemble;
pub use csv_io::{read_records, write_cleaned, write_errors};
