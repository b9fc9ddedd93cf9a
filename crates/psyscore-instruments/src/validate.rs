//! Structural and referential checks run before synthesis.
//!
//! [`check`] always reports every issue it finds so a configuration author
//! can fix everything in one pass. [`validate`] turns that report into a
//! [`ValidatedDefinition`], the only input the synthesizer accepts.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::definition::{DEFAULT_SCALE_MAX, QuestionnaireDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// Blocks synthesis.
    Error,
    /// Reported; synthesis proceeds.
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueCode {
    InvalidItemRange,
    ReverseItemOutOfRange,
    SubscaleItemOutOfRange,
    DuplicateSubscaleName,
    TotalWithoutSubscales,
    MissingScaleMax,
    InvalidScale,
    PrefixMismatch,
    EmptySubscale,
    ColumnCollision,
    DuplicateItem,
    ItemCountMismatch,
    MinItemsUnreachable,
    UnknownOutputColumn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: IssueCode,
    /// Dotted path into the configuration, e.g. `subscales[1].items[3]`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{severity} [{}]: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub questionnaire: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors. Warnings may still be present.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "{}: no issues", self.questionnaire);
        }
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {issue}")?;
        }
        Ok(())
    }
}

/// A definition that passed [`check`] without errors. Read-only from here on.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDefinition {
    definition: QuestionnaireDefinition,
    warnings: Vec<ValidationIssue>,
}

impl ValidatedDefinition {
    pub fn definition(&self) -> &QuestionnaireDefinition {
        &self.definition
    }

    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }
}

/// Validate a definition, refusing it if any error-level issue exists.
/// Warnings are logged and kept on the returned value.
pub fn validate(definition: QuestionnaireDefinition) -> Result<ValidatedDefinition, ValidationReport> {
    let report = check(&definition);
    for warning in report.warnings() {
        tracing::warn!(
            questionnaire = %report.questionnaire,
            path = %warning.path,
            "{}",
            warning.message
        );
    }
    if report.has_errors() {
        return Err(report);
    }
    Ok(ValidatedDefinition {
        definition,
        warnings: report.issues,
    })
}

/// Widest item range a definition may declare.
pub const MAX_ITEMS: i64 = 10_000;

/// Run every check and collect all issues, in check order.
pub fn check(def: &QuestionnaireDefinition) -> ValidationReport {
    let mut issues = Issues::default();
    let (min, max) = def.item_range();
    let in_range = |index: i64| (min..=max).contains(&index);

    // 1. item range
    let range_ok = min >= 1 && min <= max && max <= i64::from(u32::MAX) && max - min < MAX_ITEMS;
    if !range_ok {
        issues.error(
            IssueCode::InvalidItemRange,
            "items.item_range",
            format!("item range [{min}, {max}] must satisfy 1 <= min <= max and span at most {MAX_ITEMS} items"),
        );
    }

    // 2. reverse items inside the range
    if range_ok && let Some(reverse) = def.reversal() {
        for (i, &index) in reverse.items.iter().enumerate() {
            if !in_range(index) {
                issues.error(
                    IssueCode::ReverseItemOutOfRange,
                    format!("reverse_scoring.items[{i}]"),
                    format!("reverse-scored item {index} is outside item range [{min}, {max}]"),
                );
            }
        }
    }

    // 3. subscale items inside the range
    if range_ok {
        for (s, subscale) in def.subscales.iter().enumerate() {
            for (i, &index) in subscale.items.iter().enumerate() {
                if !in_range(index) {
                    issues.error(
                        IssueCode::SubscaleItemOutOfRange,
                        format!("subscales[{s}].items[{i}]"),
                        format!(
                            "subscale '{}' references item {index} outside item range [{min}, {max}]",
                            subscale.name
                        ),
                    );
                }
            }
        }
    }

    // 4. unique subscale names
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (s, subscale) in def.subscales.iter().enumerate() {
        if let Some(&first) = first_seen.get(subscale.name.as_str()) {
            issues.error(
                IssueCode::DuplicateSubscaleName,
                format!("subscales[{s}].name"),
                format!(
                    "duplicate subscale name '{}' (first declared at subscales[{first}])",
                    subscale.name
                ),
            );
        } else {
            first_seen.insert(subscale.name.as_str(), s);
        }
    }

    // 5. total needs subscales
    if def.total().is_some() && def.subscales.is_empty() {
        issues.error(
            IssueCode::TotalWithoutSubscales,
            "total_score",
            "total score is enabled but no subscales are declared".to_string(),
        );
    }

    // 6. scale_max declared when reversing
    if let Some(reverse) = def.reversal() {
        if reverse.scale_max.is_none() {
            issues.warning(
                IssueCode::MissingScaleMax,
                "reverse_scoring.scale_max",
                format!("scale_max not declared; assuming {DEFAULT_SCALE_MAX}"),
            );
        }

        let (scale_min, scale_max) = (reverse.scale_min(), reverse.scale_max());
        if scale_max <= 0 {
            issues.error(
                IssueCode::InvalidScale,
                "reverse_scoring.scale_max",
                format!("scale_max must be a positive integer, got {scale_max}"),
            );
        } else if scale_min < 0 || scale_min >= scale_max {
            issues.error(
                IssueCode::InvalidScale,
                "reverse_scoring.scale_min",
                format!("scale_min must satisfy 0 <= scale_min < scale_max ({scale_max}), got {scale_min}"),
            );
        }

        duplicate_items(&mut issues, &reverse.items, "reverse_scoring.items");
    }

    let format = def.item_format();
    if range_ok {
        let sample = format.column_name(min as u32);
        if !sample.starts_with(&def.prefix) {
            issues.error(
                IssueCode::PrefixMismatch,
                "items.item_format",
                format!("item column '{sample}' does not start with prefix '{}'", def.prefix),
            );
        }
    }

    for (s, subscale) in def.subscales.iter().enumerate() {
        if subscale.items.is_empty() {
            issues.error(
                IssueCode::EmptySubscale,
                format!("subscales[{s}].items"),
                format!("subscale '{}' has no items", subscale.name),
            );
        }
        duplicate_items(&mut issues, &subscale.items, &format!("subscales[{s}].items"));
    }

    // Prefixed score names must not shadow item columns or each other.
    let is_item_column = |name: &str| {
        range_ok && format.index_of(name).is_some_and(|i| in_range(i64::from(i)))
    };
    for (s, subscale) in def.subscales.iter().enumerate() {
        let column = def.subscale_column(subscale);
        if is_item_column(&column) {
            issues.error(
                IssueCode::ColumnCollision,
                format!("subscales[{s}].name"),
                format!("subscale column '{column}' collides with an item column"),
            );
        }
    }
    if let Some(total_column) = def.total_column() {
        if is_item_column(&total_column) {
            issues.error(
                IssueCode::ColumnCollision,
                "total_score.name",
                format!("total column '{total_column}' collides with an item column"),
            );
        }
        if def.subscales.iter().any(|s| def.subscale_column(s) == total_column) {
            issues.error(
                IssueCode::ColumnCollision,
                "total_score.name",
                format!("total column '{total_column}' collides with a subscale column"),
            );
        }
    }

    if range_ok && def.items.item_range.is_some() {
        let width = max - min + 1;
        if width != i64::from(def.items.total_items) {
            issues.warning(
                IssueCode::ItemCountMismatch,
                "items.total_items",
                format!(
                    "total_items is {} but item range [{min}, {max}] spans {width} items",
                    def.items.total_items
                ),
            );
        }
    }

    if range_ok && let Some(required) = def.validation.min_items_required {
        let available = max - min + 1;
        if i64::from(required) > available {
            issues.warning(
                IssueCode::MinItemsUnreachable,
                "validation.min_items_required",
                format!(
                    "min_items_required is {required} but only {available} items exist; every respondent will score as missing"
                ),
            );
        }
    }

    if let Some(declared) = &def.output_columns {
        let produced: HashSet<String> = def.score_columns().into_iter().collect();
        for (i, column) in declared.iter().enumerate() {
            if !produced.contains(column) && !is_item_column(column) {
                issues.warning(
                    IssueCode::UnknownOutputColumn,
                    format!("output_columns[{i}]"),
                    format!("output column '{column}' is never produced and will be dropped"),
                );
            }
        }
    }

    ValidationReport {
        questionnaire: def.questionnaire_name.clone(),
        issues: issues.0,
    }
}

fn duplicate_items(issues: &mut Issues, items: &[i64], path: &str) {
    let mut seen = HashSet::new();
    for (i, index) in items.iter().enumerate() {
        if !seen.insert(index) {
            issues.warning(
                IssueCode::DuplicateItem,
                format!("{path}[{i}]"),
                format!("item {index} is listed more than once; it is used once"),
            );
        }
    }
}

#[derive(Default)]
struct Issues(Vec<ValidationIssue>);

impl Issues {
    fn error(&mut self, code: IssueCode, path: impl Into<String>, message: String) {
        self.push(Severity::Error, code, path.into(), message);
    }

    fn warning(&mut self, code: IssueCode, path: impl Into<String>, message: String) {
        self.push(Severity::Warning, code, path.into(), message);
    }

    fn push(&mut self, severity: Severity, code: IssueCode, path: String, message: String) {
        self.0.push(ValidationIssue {
            severity,
            code,
            path,
            message,
        });
    }
}
