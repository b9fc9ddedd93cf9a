use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single raw response value as read from a survey export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Cell {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl Cell {
    /// Interpret a raw field. Blank fields and `NaN` literals are missing;
    /// anything that parses as a float is a number; everything else is kept
    /// as text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Missing,
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }

    /// Numeric view of the cell. Unparsable text is missing, not an error.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v).filter(|v| !v.is_nan()),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            Cell::Missing => None,
        }
    }

    /// True when the cell carries no usable number.
    pub fn is_missing(&self) -> bool {
        self.as_number().is_none()
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        if v.is_nan() { Cell::Missing } else { Cell::Number(v) }
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        v.map(Cell::from).unwrap_or(Cell::Missing)
    }
}

impl From<&str> for Cell {
    fn from(raw: &str) -> Self {
        Cell::parse(raw)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Missing => Ok(()),
        }
    }
}

/// A named column of cells, one per respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Build a numeric column; `None` becomes a missing cell.
    pub fn from_numbers(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, values.into_iter().map(Cell::from).collect())
    }

    /// Coerce every cell to a number, unparsable entries becoming `None`.
    pub fn numbers(&self) -> Vec<Option<f64>> {
        self.cells.iter().map(Cell::as_number).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Survey responses: rows are respondents, columns are named items.
///
/// Column order is preserved as inserted and every column has exactly
/// `row_count` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl ResponseTable {
    /// Build a table from whole columns. All columns must have the same
    /// length and distinct names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, CoreError> {
        let mut table = ResponseTable::default();
        for column in columns {
            if table.contains_column(&column.name) {
                return Err(CoreError::DuplicateColumn(column.name));
            }
            table.insert_column(column)?;
        }
        Ok(table)
    }

    /// Build a table from a header and row-major records.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(CoreError::DuplicateColumn(header.clone()));
            }
        }

        let width = headers.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();

        let row_count = rows.len();
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(CoreError::RaggedRow {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.cells.push(cell);
            }
        }

        Ok(ResponseTable { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Insert a column, replacing any existing column of the same name in
    /// place. The first column inserted into an empty table fixes the row
    /// count.
    pub fn insert_column(&mut self, column: Column) -> Result<(), CoreError> {
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(CoreError::RaggedColumn {
                column: column.name,
                expected: self.row_count,
                found: column.cells.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Project onto the requested columns, in request order. Names that do
    /// not exist are skipped; repeated names appear once.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> ResponseTable {
        let mut seen = HashSet::new();
        let columns: Vec<Column> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| seen.insert(*name))
            .filter_map(|name| self.column(name).cloned())
            .collect();
        let row_count = if columns.is_empty() { 0 } else { self.row_count };
        ResponseTable { columns, row_count }
    }

    /// Concatenate `other` column-wise onto this table. Row order is kept;
    /// both tables must describe the same respondents.
    pub fn append(&mut self, other: ResponseTable) -> Result<(), CoreError> {
        if other.columns.is_empty() {
            return Ok(());
        }
        if !self.columns.is_empty() && other.row_count != self.row_count {
            return Err(CoreError::RowCountMismatch {
                expected: self.row_count,
                found: other.row_count,
            });
        }
        if let Some(dup) = other.columns.iter().find(|c| self.contains_column(&c.name)) {
            return Err(CoreError::DuplicateColumn(dup.name.clone()));
        }
        if self.columns.is_empty() {
            self.row_count = other.row_count;
        }
        self.columns.extend(other.columns);
        Ok(())
    }

    /// Row-major view of one respondent, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells[index]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> {
        (0..self.row_count).map(|i| self.columns.iter().map(|c| &c.cells[i]).collect())
    }
}
