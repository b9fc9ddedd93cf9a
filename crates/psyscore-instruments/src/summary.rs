use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use psyscore_core::ResponseTable;

use crate::aggregate;

/// One reported statistic, e.g. `Mean BFI_Openness`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryEntry {
    pub label: String,
    /// `None` when the statistic is undefined (no values, or a single value
    /// for the standard deviation).
    pub value: Option<f64>,
}

/// Descriptive statistics over score columns, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Summary {
    pub entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .and_then(|e| e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SummaryEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match entry.value {
                Some(value) => write!(f, "{}: {value:.2}", entry.label)?,
                None => write!(f, "{}: n/a", entry.label)?,
            }
        }
        Ok(())
    }
}

/// Mean and sample standard deviation for each named column present in the
/// table. Missing values are excluded. An empty table yields an empty
/// summary.
pub fn summarize<S: AsRef<str>>(table: &ResponseTable, columns: &[S]) -> Summary {
    if table.is_empty() {
        return Summary::default();
    }

    let mut entries = Vec::with_capacity(columns.len() * 2);
    for name in columns.iter().map(AsRef::as_ref) {
        let Some(column) = table.column(name) else {
            continue;
        };
        let values = column.numbers();
        entries.push(SummaryEntry {
            label: format!("Mean {name}"),
            value: aggregate::mean(values.iter().copied()),
        });
        entries.push(SummaryEntry {
            label: format!("Std Dev {name}"),
            value: aggregate::sample_std_dev(values),
        });
    }
    Summary { entries }
}
