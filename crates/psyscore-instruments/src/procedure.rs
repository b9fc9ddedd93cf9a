//! Synthesis of scoring procedures from validated definitions.
//!
//! Every item reference is resolved once, at synthesis time, into an
//! [`ItemColumn`]. The resulting [`ScoringProcedure`] is immutable and can
//! be invoked against any number of response tables.

use std::collections::{HashMap, HashSet};

use psyscore_core::{Column, CoreError, ResponseTable};

use crate::aggregate;
use crate::definition::ScoringMethod;
use crate::error::{ScoringError, SynthesisError};
use crate::item::ItemColumn;
use crate::validate::ValidatedDefinition;

/// Builds [`ScoringProcedure`]s.
///
/// By default item references resolve against the columns the definition
/// itself declares. [`with_table_schema`](Self::with_table_schema) resolves
/// them against a real table header instead, so a configuration that does
/// not match the data fails at build time rather than scoring nothing.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    schema: Option<HashSet<String>>,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_schema<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema: Some(columns.into_iter().map(Into::into).collect()),
        }
    }

    pub fn synthesize(&self, validated: &ValidatedDefinition) -> Result<ScoringProcedure, SynthesisError> {
        let def = validated.definition();
        let format = def.item_format();
        let (min, max) = def.item_range();

        let declared: Vec<ItemColumn> = (min..=max)
            .filter_map(|i| u32::try_from(i).ok())
            .map(|index| ItemColumn {
                index,
                name: format.column_name(index),
            })
            .collect();
        let by_index: HashMap<i64, &ItemColumn> = declared.iter().map(|c| (i64::from(c.index), c)).collect();

        let mut unresolved = Vec::new();
        let mut resolve = |indices: &[i64]| -> Vec<ItemColumn> {
            let mut seen = HashSet::new();
            let mut resolved = Vec::new();
            for &index in indices {
                if !seen.insert(index) {
                    continue;
                }
                match by_index.get(&index).copied() {
                    Some(column) if self.in_schema(&column.name) => resolved.push(column.clone()),
                    Some(column) => unresolved.push(column.name.clone()),
                    None => unresolved.push(format!("{}[{index}]", def.prefix)),
                }
            }
            resolved
        };

        let reversal = def.reversal().map(|rules| Reversal {
            items: resolve(&rules.items),
            scale_min: rules.scale_min() as f64,
            scale_max: rules.scale_max() as f64,
        });

        let subscales: Vec<SubscaleStep> = def
            .subscales
            .iter()
            .map(|subscale| SubscaleStep {
                column: def.subscale_column(subscale),
                method: subscale.scoring_method,
                items: resolve(&subscale.items),
            })
            .collect();

        if !unresolved.is_empty() {
            let mut seen = HashSet::new();
            unresolved.retain(|name| seen.insert(name.clone()));
            return Err(SynthesisError::UnresolvableColumn {
                questionnaire: def.questionnaire_name.clone(),
                columns: unresolved,
            });
        }

        let total = def.total_column().map(|column| TotalStep {
            column,
            sources: subscales.iter().map(|s| s.column.clone()).collect(),
        });

        // Only coerce item columns the bound table actually has.
        let items: Vec<ItemColumn> = declared
            .into_iter()
            .filter(|c| self.in_schema(&c.name))
            .collect();

        tracing::debug!(
            questionnaire = %def.questionnaire_name,
            items = items.len(),
            reversed = reversal.as_ref().map_or(0, |r| r.items.len()),
            subscales = subscales.len(),
            total = total.is_some(),
            "synthesized scoring procedure"
        );

        Ok(ScoringProcedure {
            id: def.questionnaire_name.clone(),
            name: def.display_name().to_string(),
            prefix: def.prefix.clone(),
            items,
            reversal,
            subscales,
            total,
            min_items_required: def.validation.min_items_required.unwrap_or(0) as usize,
            error_on_insufficient_data: def.validation.error_on_insufficient_data,
            output_columns: def.output_columns(),
        })
    }

    fn in_schema(&self, column: &str) -> bool {
        self.schema.as_ref().is_none_or(|s| s.contains(column))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reversal {
    pub items: Vec<ItemColumn>,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl Reversal {
    pub fn apply(&self, value: f64) -> f64 {
        aggregate::reverse(value, self.scale_min, self.scale_max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscaleStep {
    pub column: String,
    pub method: ScoringMethod,
    pub items: Vec<ItemColumn>,
}

/// Mean of the subscale columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalStep {
    pub column: String,
    pub sources: Vec<String>,
}

/// An executable scoring procedure for one questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProcedure {
    id: String,
    name: String,
    prefix: String,
    items: Vec<ItemColumn>,
    reversal: Option<Reversal>,
    subscales: Vec<SubscaleStep>,
    total: Option<TotalStep>,
    min_items_required: usize,
    error_on_insufficient_data: bool,
    output_columns: Vec<String>,
}

impl ScoringProcedure {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn items(&self) -> &[ItemColumn] {
        &self.items
    }

    pub fn reversal(&self) -> Option<&Reversal> {
        self.reversal.as_ref()
    }

    pub fn subscales(&self) -> &[SubscaleStep] {
        &self.subscales
    }

    pub fn total(&self) -> Option<&TotalStep> {
        self.total.as_ref()
    }

    pub fn output_columns(&self) -> &[String] {
        &self.output_columns
    }

    /// Item columns the procedure reads, deduplicated, in first-use order.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.reversal
            .iter()
            .flat_map(|r| &r.items)
            .chain(self.subscales.iter().flat_map(|s| &s.items))
            .map(|c| c.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Score a response table.
    ///
    /// Works on a copy: the caller's table is never modified, so invoking
    /// twice on the same table reverse-scores exactly once per invocation
    /// and yields the same result. Returns `Ok(None)` when none of the
    /// output columns exist after scoring.
    pub fn invoke(&self, table: &ResponseTable) -> Result<Option<ResponseTable>, ScoringError> {
        let absent: Vec<String> = self
            .required_columns()
            .into_iter()
            .filter(|name| !table.contains_column(name))
            .map(str::to_string)
            .collect();
        if !absent.is_empty() {
            return Err(ScoringError::MissingColumns {
                questionnaire: self.id.clone(),
                columns: absent,
            });
        }

        let rows = table.row_count();

        let mut values: HashMap<&str, Vec<Option<f64>>> = self
            .items
            .iter()
            .filter_map(|item| {
                table
                    .column(&item.name)
                    .map(|column| (item.name.as_str(), column.numbers()))
            })
            .collect();

        if let Some(reversal) = &self.reversal {
            for item in &reversal.items {
                if let Some(column) = values.get_mut(item.name.as_str()) {
                    for value in column.iter_mut() {
                        *value = value.map(|v| reversal.apply(v));
                    }
                }
            }
        }

        let mut sufficient = vec![true; rows];
        if self.min_items_required > 0 {
            for (row, flag) in sufficient.iter_mut().enumerate() {
                let present = values.values().filter(|c| c[row].is_some()).count();
                if present < self.min_items_required {
                    if self.error_on_insufficient_data {
                        return Err(ScoringError::InsufficientData {
                            questionnaire: self.id.clone(),
                            row,
                            present,
                            required: self.min_items_required,
                        });
                    }
                    *flag = false;
                }
            }
        }

        let mut scores: Vec<(&str, Vec<Option<f64>>)> = Vec::with_capacity(self.subscales.len() + 1);
        for step in &self.subscales {
            let sources: Vec<&Vec<Option<f64>>> = step
                .items
                .iter()
                .filter_map(|item| values.get(item.name.as_str()))
                .collect();
            let column = (0..rows)
                .map(|row| {
                    if !sufficient[row] {
                        return None;
                    }
                    step.method.aggregate(sources.iter().map(|c| c[row]))
                })
                .collect();
            scores.push((step.column.as_str(), column));
        }

        if let Some(total) = &self.total {
            let column = (0..rows)
                .map(|row| aggregate::mean(scores.iter().map(|(_, c)| c[row])))
                .collect();
            scores.push((total.column.as_str(), column));
        }

        let mut working = table.clone();
        let wrap = |source: CoreError| ScoringError::Table {
            questionnaire: self.id.clone(),
            source,
        };
        for (name, column) in values.into_iter().chain(scores) {
            working
                .insert_column(Column::from_numbers(name, column))
                .map_err(wrap)?;
        }

        let result = working.select(&self.output_columns);
        if result.column_count() == 0 {
            tracing::warn!(questionnaire = %self.id, "no output columns produced");
            return Ok(None);
        }

        tracing::debug!(
            questionnaire = %self.id,
            rows,
            columns = result.column_count(),
            "scored questionnaire"
        );
        Ok(Some(result))
    }
}
