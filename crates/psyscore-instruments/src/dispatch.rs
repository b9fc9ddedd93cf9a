//! Detect and score every registered questionnaire present in a table.
//!
//! Each questionnaire is scored independently. A questionnaire that fails
//! contributes nothing to the combined table and is reported by name; the
//! others are unaffected.

use psyscore_core::ResponseTable;

use crate::error::ScoringError;
use crate::registry::Registry;
use crate::summary::Summary;

/// A questionnaire that scored successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub id: String,
    pub prefix: String,
    pub columns: Vec<String>,
    pub summary: Summary,
}

/// A questionnaire that was detected but could not be scored.
#[derive(Debug, PartialEq)]
pub struct Failure {
    pub id: String,
    pub prefix: String,
    pub error: ScoringError,
}

#[derive(Debug, Default)]
pub struct ScoringRun {
    /// Score columns of every successful questionnaire, in dispatch order,
    /// with the input's respondent order.
    pub scores: ResponseTable,
    pub scored: Vec<Scored>,
    pub failures: Vec<Failure>,
    /// Detected questionnaires that produced no output columns.
    pub empty: Vec<String>,
}

impl ScoringRun {
    pub fn detected(&self) -> usize {
        self.scored.len() + self.failures.len() + self.empty.len()
    }
}

pub fn score_all(registry: &Registry, table: &ResponseTable) -> ScoringRun {
    let mut run = ScoringRun::default();

    for instrument in registry.detect(table) {
        tracing::info!(
            questionnaire = %instrument.id(),
            prefix = %instrument.prefix(),
            "processing questionnaire"
        );

        let scored = match instrument.score(table) {
            Ok(Some(scored)) => scored,
            Ok(None) => {
                tracing::warn!(questionnaire = %instrument.id(), "no score columns produced");
                run.empty.push(instrument.id().to_string());
                continue;
            }
            Err(error) => {
                tracing::warn!(questionnaire = %instrument.id(), %error, "scoring failed");
                run.failures.push(Failure {
                    id: instrument.id().to_string(),
                    prefix: instrument.prefix().to_string(),
                    error,
                });
                continue;
            }
        };

        let summary = instrument.summarize(&scored);
        let columns: Vec<String> = scored.column_names().map(str::to_string).collect();

        if let Err(source) = run.scores.append(scored) {
            let error = ScoringError::Table {
                questionnaire: instrument.id().to_string(),
                source,
            };
            tracing::warn!(questionnaire = %instrument.id(), %error, "could not combine scores");
            run.failures.push(Failure {
                id: instrument.id().to_string(),
                prefix: instrument.prefix().to_string(),
                error,
            });
            continue;
        }

        run.scored.push(Scored {
            id: instrument.id().to_string(),
            prefix: instrument.prefix().to_string(),
            columns,
            summary,
        });
    }

    run
}
