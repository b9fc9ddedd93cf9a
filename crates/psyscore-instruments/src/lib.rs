//! psyscore-instruments
//!
//! Questionnaire definitions and the pipeline that turns them into scoring
//! procedures: parse → validate → synthesize → register. Pure computation;
//! reading and writing files is left to callers.

pub mod aggregate;
pub mod definition;
pub mod dispatch;
pub mod error;
pub mod instruments;
pub mod item;
pub mod procedure;
pub mod registry;
pub mod summary;
pub mod validate;

use psyscore_core::ResponseTable;

pub use crate::definition::QuestionnaireDefinition;
pub use crate::error::{ConfigError, InstrumentError, ScoringError, SynthesisError};
pub use crate::procedure::{ScoringProcedure, Synthesizer};
pub use crate::registry::Registry;
pub use crate::summary::Summary;
pub use crate::validate::{ValidatedDefinition, ValidationReport};

/// A scoring unit that can be registered and dispatched by column prefix.
pub trait Instrument: Send + Sync {
    /// Short questionnaire name (e.g., "BFI", "MSPSS").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Big Five Inventory").
    fn name(&self) -> &str;

    /// Column prefix shared by all item columns (e.g., "BFI_").
    fn prefix(&self) -> &str;

    /// Columns this instrument guarantees in its scored output.
    fn score_columns(&self) -> &[String];

    /// Score a response table. `Ok(None)` means nothing could be produced.
    fn score(&self, table: &ResponseTable) -> Result<Option<ResponseTable>, ScoringError>;

    /// True when at least one column of `table` carries this prefix.
    fn detects(&self, table: &ResponseTable) -> bool {
        table.column_names().any(|c| c.starts_with(self.prefix()))
    }

    /// Mean and standard deviation of each score column.
    fn summarize(&self, scored: &ResponseTable) -> Summary {
        summary::summarize(scored, self.score_columns())
    }
}

impl Instrument for ScoringProcedure {
    fn id(&self) -> &str {
        ScoringProcedure::id(self)
    }

    fn name(&self) -> &str {
        ScoringProcedure::name(self)
    }

    fn prefix(&self) -> &str {
        ScoringProcedure::prefix(self)
    }

    fn score_columns(&self) -> &[String] {
        self.output_columns()
    }

    fn score(&self, table: &ResponseTable) -> Result<Option<ResponseTable>, ScoringError> {
        self.invoke(table)
    }
}

/// Validate and synthesize a definition in one step.
pub fn compile(definition: QuestionnaireDefinition) -> Result<ScoringProcedure, InstrumentError> {
    let validated = validate_definition(definition)?;
    Ok(Synthesizer::new().synthesize(&validated)?)
}

/// Parse, validate and synthesize a JSON configuration document.
pub fn compile_json(json: &str) -> Result<ScoringProcedure, InstrumentError> {
    compile(QuestionnaireDefinition::from_json(json)?)
}

/// [`validate::validate`], with the report wrapped as an [`InstrumentError`].
pub fn validate_definition(
    definition: QuestionnaireDefinition,
) -> Result<ValidatedDefinition, InstrumentError> {
    let questionnaire = definition.questionnaire_name.clone();
    validate::validate(definition)
        .map_err(|report| InstrumentError::Validation { questionnaire, report })
}
