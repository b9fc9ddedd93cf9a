//! Response tables as CSV: a header row of column names, one row per
//! respondent. Empty fields are missing values.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use psyscore_core::{Cell, ResponseTable};

use crate::error::ExportError;

pub fn read_table<R: Read>(reader: R) -> Result<ResponseTable, ExportError> {
    let mut reader = ::csv::ReaderBuilder::new().trim(::csv::Trim::Headers).from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::parse).collect());
    }

    let table = ResponseTable::from_rows(headers, rows)?;
    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "read response table"
    );
    Ok(table)
}

pub fn read_table_path(path: &Path) -> Result<ResponseTable, ExportError> {
    let file = File::open(path).map_err(ExportError::io(path))?;
    read_table(file)
}

/// Write a table with its header. Numbers use the shortest form that
/// parses back to the same value; missing cells are empty.
pub fn write_table<W: Write>(table: &ResponseTable, writer: W) -> Result<(), ExportError> {
    let mut writer = ::csv::Writer::from_writer(writer);
    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush().map_err(|e| ExportError::Csv(e.into()))?;
    Ok(())
}

pub fn write_table_path(table: &ResponseTable, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(ExportError::io(path))?;
    write_table(table, file)?;
    tracing::info!(path = %path.display(), rows = table.row_count(), "wrote response table");
    Ok(())
}
