use thiserror::Error;

use psyscore_core::CoreError;

use crate::validate::ValidationReport;

/// A configuration document that cannot be turned into a definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for '{field}': {message}")]
    Type { field: String, message: String },
}

/// A validated definition that still cannot be compiled into a procedure.
#[derive(Debug, Error, PartialEq)]
pub enum SynthesisError {
    #[error("{questionnaire}: unresolvable item columns: {}", .columns.join(", "))]
    UnresolvableColumn {
        questionnaire: String,
        columns: Vec<String>,
    },
}

/// Failure of a single questionnaire while scoring a table. Never raised
/// for missing answers; those become missing scores.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("{questionnaire}: item columns absent from table: {}", .columns.join(", "))]
    MissingColumns {
        questionnaire: String,
        columns: Vec<String>,
    },

    #[error("{questionnaire}: row {row} has {present} answered items, {required} required")]
    InsufficientData {
        questionnaire: String,
        row: usize,
        present: usize,
        required: usize,
    },

    #[error("{questionnaire}: {source}")]
    Table {
        questionnaire: String,
        #[source]
        source: CoreError,
    },
}

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("validation failed for '{questionnaire}':\n{report}")]
    Validation {
        questionnaire: String,
        report: ValidationReport,
    },

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
