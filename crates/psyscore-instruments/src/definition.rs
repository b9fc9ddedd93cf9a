//! Questionnaire definitions and their JSON configuration format.
//!
//! A definition describes the item layout of a questionnaire, which items
//! are reverse-scored, how items group into subscales and whether a total is
//! derived from the subscales. Parsing is strict about shape and reports the
//! first missing or malformed field by its dotted path.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::ConfigError;
use crate::item::ItemFormat;

/// Scale maximum assumed when reverse scoring is enabled without one.
pub const DEFAULT_SCALE_MAX: i64 = 5;

/// Scale minimum assumed when none is declared; gives the canonical
/// `scale_max + 1 - value` reversal.
pub const DEFAULT_SCALE_MIN: i64 = 1;

pub const DEFAULT_TOTAL_NAME: &str = "Total_Score";

const REQUIRED_FIELDS: [&str; 4] = ["questionnaire_name", "prefix", "items", "subscales"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireDefinition {
    pub questionnaire_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub prefix: String,
    pub items: ItemSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_scoring: Option<ReverseScoring>,
    pub subscales: Vec<SubscaleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<TotalScore>,
    #[serde(default)]
    pub validation: ValidationPolicy,
    /// `None` means "every subscale column, then the total column".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_columns: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemSpec {
    pub total_items: u32,
    /// Inclusive `[min, max]` item indices. Defaults to `[1, total_items]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_range: Option<[i64; 2]>,
    /// Defaults to `{prefix}{:02d}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub item_format: Option<ItemFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReverseScoring {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub items: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_min: Option<i64>,
    /// Free-text note carried through from the configuration; not evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl ReverseScoring {
    pub fn scale_max(&self) -> i64 {
        self.scale_max.unwrap_or(DEFAULT_SCALE_MAX)
    }

    pub fn scale_min(&self) -> i64 {
        self.scale_min.unwrap_or(DEFAULT_SCALE_MIN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleDefinition {
    pub name: String,
    pub items: Vec<i64>,
    #[serde(default)]
    pub scoring_method: ScoringMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SubscaleDefinition {
    pub fn new(name: &str, items: &[i64], scoring_method: ScoringMethod) -> Self {
        Self {
            name: name.to_string(),
            items: items.to_vec(),
            scoring_method,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMethod {
    #[default]
    Mean,
    Sum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalScore {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub method: TotalMethod,
    #[serde(default = "default_total_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_total_name() -> String {
    DEFAULT_TOTAL_NAME.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TotalMethod {
    #[default]
    MeanOfSubscales,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationPolicy {
    /// Respondents with fewer answered items score as missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items_required: Option<u32>,
    #[serde(default)]
    pub handle_missing: MissingPolicy,
    /// Fail the questionnaire instead of blanking under-answered rows.
    #[serde(default)]
    pub error_on_insufficient_data: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MissingPolicy {
    /// Drop missing values from every aggregate.
    #[default]
    SkipNa,
}

impl QuestionnaireDefinition {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse an already-decoded configuration document.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let root = object(&value, "<root>")?;
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !root.contains_key(**f)) {
            return Err(ConfigError::MissingField(missing.to_string()));
        }

        let questionnaire_name: String = non_empty(root, "questionnaire_name", "questionnaire_name")?;
        let prefix: String = non_empty(root, "prefix", "prefix")?;

        let items = parse_items(required_object(root, "items", "items")?)?;

        let reverse_scoring = match optional_object(root, "reverse_scoring", "reverse_scoring")? {
            Some(obj) => Some(ReverseScoring {
                enabled: take(obj, "enabled", "reverse_scoring.enabled")?.unwrap_or(false),
                items: take(obj, "items", "reverse_scoring.items")?.unwrap_or_default(),
                scale_max: take(obj, "scale_max", "reverse_scoring.scale_max")?,
                scale_min: take(obj, "scale_min", "reverse_scoring.scale_min")?,
                formula: take(obj, "formula", "reverse_scoring.formula")?,
            }),
            None => None,
        };

        let subscales = match root.get("subscales") {
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(i, entry)| parse_subscale(entry, i))
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(type_error("subscales", "expected a list of subscales")),
        };

        let total_score = match optional_object(root, "total_score", "total_score")? {
            Some(obj) => Some(TotalScore {
                enabled: take(obj, "enabled", "total_score.enabled")?.unwrap_or(false),
                method: take(obj, "method", "total_score.method")?.unwrap_or_default(),
                name: take(obj, "name", "total_score.name")?.unwrap_or_else(default_total_name),
                description: take(obj, "description", "total_score.description")?,
            }),
            None => None,
        };

        let validation = match optional_object(root, "validation", "validation")? {
            Some(obj) => ValidationPolicy {
                min_items_required: take(obj, "min_items_required", "validation.min_items_required")?,
                handle_missing: take(obj, "handle_missing", "validation.handle_missing")?
                    .unwrap_or_default(),
                error_on_insufficient_data: take(
                    obj,
                    "error_on_insufficient_data",
                    "validation.error_on_insufficient_data",
                )?
                .unwrap_or(false),
            },
            None => ValidationPolicy::default(),
        };

        Ok(QuestionnaireDefinition {
            questionnaire_name,
            full_name: take(root, "full_name", "full_name")?,
            description: take(root, "description", "description")?,
            prefix,
            items,
            reverse_scoring,
            subscales,
            total_score,
            validation,
            output_columns: take(root, "output_columns", "output_columns")?,
        })
    }

    /// A complete example configuration covering every section.
    pub fn sample() -> Self {
        QuestionnaireDefinition {
            questionnaire_name: "SAMPLE".to_string(),
            full_name: Some("Sample Questionnaire".to_string()),
            description: Some(
                "A sample questionnaire demonstrating the JSON configuration format".to_string(),
            ),
            prefix: "SAMPLE_".to_string(),
            items: ItemSpec {
                total_items: 10,
                item_range: Some([1, 10]),
                item_format: Some(ItemFormat::padded("SAMPLE_", 2)),
            },
            reverse_scoring: Some(ReverseScoring {
                enabled: true,
                items: vec![3, 7],
                scale_max: Some(5),
                scale_min: None,
                formula: Some("scale_max + 1 - original_value".to_string()),
            }),
            subscales: vec![
                SubscaleDefinition {
                    description: Some("Measures positive aspects".to_string()),
                    ..SubscaleDefinition::new("Positive_Subscale", &[1, 2, 4, 5, 8], ScoringMethod::Mean)
                },
                SubscaleDefinition {
                    description: Some("Measures negative aspects".to_string()),
                    ..SubscaleDefinition::new("Negative_Subscale", &[3, 6, 7, 9, 10], ScoringMethod::Mean)
                },
            ],
            total_score: Some(TotalScore {
                enabled: true,
                method: TotalMethod::MeanOfSubscales,
                name: DEFAULT_TOTAL_NAME.to_string(),
                description: Some("Overall questionnaire score".to_string()),
            }),
            validation: ValidationPolicy {
                min_items_required: Some(8),
                handle_missing: MissingPolicy::SkipNa,
                error_on_insufficient_data: false,
            },
            output_columns: Some(vec![
                "SAMPLE_Positive_Subscale".to_string(),
                "SAMPLE_Negative_Subscale".to_string(),
                "SAMPLE_Total_Score".to_string(),
            ]),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Full name when declared, otherwise the short questionnaire name.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.questionnaire_name)
    }

    /// Inclusive item index range.
    pub fn item_range(&self) -> (i64, i64) {
        match self.items.item_range {
            Some([min, max]) => (min, max),
            None => (1, i64::from(self.items.total_items)),
        }
    }

    pub fn item_format(&self) -> ItemFormat {
        self.items
            .item_format
            .clone()
            .unwrap_or_else(|| ItemFormat::padded(self.prefix.clone(), 2))
    }

    /// Reverse-scoring rules, only when enabled.
    pub fn reversal(&self) -> Option<&ReverseScoring> {
        self.reverse_scoring.as_ref().filter(|r| r.enabled)
    }

    /// Total-score rules, only when enabled.
    pub fn total(&self) -> Option<&TotalScore> {
        self.total_score.as_ref().filter(|t| t.enabled)
    }

    pub fn subscale_column(&self, subscale: &SubscaleDefinition) -> String {
        format!("{}{}", self.prefix, subscale.name)
    }

    pub fn total_column(&self) -> Option<String> {
        self.total().map(|t| format!("{}{}", self.prefix, t.name))
    }

    /// Every score column the procedure computes, in computation order.
    pub fn score_columns(&self) -> Vec<String> {
        self.subscales
            .iter()
            .map(|s| self.subscale_column(s))
            .chain(self.total_column())
            .collect()
    }

    /// Declared output columns, or the computed score columns when the
    /// configuration leaves them out.
    pub fn output_columns(&self) -> Vec<String> {
        self.output_columns
            .clone()
            .unwrap_or_else(|| self.score_columns())
    }
}

fn parse_items(obj: &Map<String, Value>) -> Result<ItemSpec, ConfigError> {
    let total_items: i64 = required(obj, "total_items", "items.total_items")?;
    let total_items = u32::try_from(total_items)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| type_error("items.total_items", "must be a positive integer"))?;

    let item_format = take::<String>(obj, "item_format", "items.item_format")?
        .map(|pattern| {
            ItemFormat::parse(&pattern).map_err(|message| type_error("items.item_format", &message))
        })
        .transpose()?;

    Ok(ItemSpec {
        total_items,
        item_range: take(obj, "item_range", "items.item_range")?,
        item_format,
    })
}

fn parse_subscale(entry: &Value, index: usize) -> Result<SubscaleDefinition, ConfigError> {
    let path = format!("subscales[{index}]");
    let obj = object(entry, &path)?;
    Ok(SubscaleDefinition {
        name: non_empty(obj, "name", &format!("{path}.name"))?,
        items: required(obj, "items", &format!("{path}.items"))?,
        scoring_method: take(obj, "scoring_method", &format!("{path}.scoring_method"))?
            .unwrap_or_default(),
        description: take(obj, "description", &format!("{path}.description"))?,
    })
}

fn type_error(field: &str, message: &str) -> ConfigError {
    ConfigError::Type {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| type_error(path, "expected an object"))
}

fn required_object<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    optional_object(parent, key, path)?.ok_or_else(|| ConfigError::MissingField(path.to_string()))
}

fn optional_object<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a Map<String, Value>>, ConfigError> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => object(value, path).map(Some),
    }
}

/// Deserialize `key` if present. `null` counts as absent.
fn take<T: DeserializeOwned>(
    parent: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<T>, ConfigError> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| type_error(path, &e.to_string())),
    }
}

fn required<T: DeserializeOwned>(
    parent: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<T, ConfigError> {
    take(parent, key, path)?.ok_or_else(|| ConfigError::MissingField(path.to_string()))
}

fn non_empty(parent: &Map<String, Value>, key: &str, path: &str) -> Result<String, ConfigError> {
    let value: String = required(parent, key, path)?;
    if value.trim().is_empty() {
        return Err(type_error(path, "must not be empty"));
    }
    Ok(value)
}
