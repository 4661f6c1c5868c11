// src/report/csv_io.rs
// =============================================================================
// CSV input and output.
//
// Input:  two columns, no header; column 1 = source, column 2 = destination.
//         Extra columns are ignored, missing ones read as "".
// Output: cleaned.csv         -> source,destination (no header)
//         redirect-errors.csv -> header row + source,destination,status
//
// The path-based functions wrap reader/writer-based ones so the format logic
// can be tested against in-memory buffers.
// =============================================================================

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use super::assemble::ErrorRow;
use crate::analysis::RedirectRecord;
use crate::error::AuditError;

/// Reads redirect records from a CSV file
pub fn read_records(path: &Path) -> Result<Vec<RedirectRecord>, AuditError> {
    if !path.is_file() {
        return Err(AuditError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let records = read_records_from(file)?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<RedirectRecord>, AuditError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Byte records so a stray non-UTF-8 byte degrades one field instead of
    // failing the whole file
    let mut records = Vec::new();
    for result in reader.byte_records() {
        let row = result?;
        records.push(RedirectRecord::new(field(&row, 0), field(&row, 1)));
    }

    Ok(records)
}

fn field(row: &csv::ByteRecord, index: usize) -> String {
    row.get(index)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

/// Writes the cleaned redirect list, creating the parent directory if needed
pub fn write_cleaned(path: &Path, rows: &[RedirectRecord]) -> Result<(), AuditError> {
    let file = create_file(path)?;
    write_cleaned_to(file, rows)?;
    debug!("Wrote {} cleaned rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn write_cleaned_to<W: Write>(writer: W, rows: &[RedirectRecord]) -> Result<(), AuditError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    for row in rows {
        wtr.write_record([row.source.as_str(), row.destination.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the error report, creating the parent directory if needed
pub fn write_errors(path: &Path, rows: &[ErrorRow]) -> Result<(), AuditError> {
    let file = create_file(path)?;
    write_errors_to(file, rows)?;
    debug!("Wrote {} error rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn write_errors_to<W: Write>(writer: W, rows: &[ErrorRow]) -> Result<(), AuditError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["source", "destination", "status"])?;
    for row in rows {
        wtr.write_record([
            row.source.as_str(),
            row.destination.as_str(),
            row.status.to_string().as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn create_file(path: &Path) -> Result<File, AuditError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
