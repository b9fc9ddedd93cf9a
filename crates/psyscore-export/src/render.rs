//! Render a validated definition as a standalone Rust module.
//!
//! The generated module has the same shape as the built-in catalog: a
//! `definition()` function returning a `LazyLock` static. Every value is
//! emitted as a Rust literal, so the module compiles without reading the
//! configuration again.

use serde::Serialize;
use tera::{Context, Tera};

use psyscore_instruments::definition::{QuestionnaireDefinition, ScoringMethod};
use psyscore_instruments::validate::ValidatedDefinition;

use crate::error::ExportError;
use crate::registration::RegistrationRecord;

const MODULE_TEMPLATE: &str = include_str!("../templates/questionnaire.rs.tera");

const RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

/// A rendered module and the record that registers it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedModule {
    pub module: String,
    pub source: String,
    pub record: RegistrationRecord,
    /// Written next to the source so later runs can load it as configuration.
    pub definition: QuestionnaireDefinition,
}

/// Derive a Rust module name from a questionnaire name: lowercase ASCII
/// alphanumerics separated by single underscores, never starting with a
/// digit and never a keyword.
pub fn module_name(questionnaire_name: &str) -> Result<String, ExportError> {
    let mut name = String::with_capacity(questionnaire_name.len());
    for c in questionnaire_name.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
        } else if !name.is_empty() && !name.ends_with('_') {
            name.push('_');
        }
    }
    while name.ends_with('_') {
        name.pop();
    }

    if name.is_empty() {
        return Err(ExportError::InvalidModuleName(questionnaire_name.to_string()));
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) || RESERVED.contains(&name.as_str()) {
        name.insert_str(0, "q_");
    }
    Ok(name)
}

pub fn render_module(validated: &ValidatedDefinition) -> Result<RenderedModule, ExportError> {
    let def = validated.definition();
    let module = module_name(&def.questionnaire_name)?;

    let mut tera = Tera::default();
    tera.add_raw_template("questionnaire.rs", MODULE_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ModuleView::new(def))?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    let source = tera.render("questionnaire.rs", &context)?;

    tracing::debug!(
        questionnaire = %def.questionnaire_name,
        module = %module,
        bytes = source.len(),
        "rendered questionnaire module"
    );

    Ok(RenderedModule {
        record: RegistrationRecord {
            questionnaire_name: def.questionnaire_name.clone(),
            full_name: def.full_name.clone(),
            prefix: def.prefix.clone(),
            module: module.clone(),
            score_columns: def.output_columns(),
        },
        module,
        source,
        definition: def.clone(),
    })
}

#[derive(Serialize)]
struct ModuleView {
    title: String,
    imports: Vec<&'static str>,
    uses_item_format: bool,
    questionnaire_name: String,
    full_name: String,
    description: String,
    prefix: String,
    total_items: u32,
    item_range: String,
    item_format: String,
    reverse_scoring: Option<ReverseView>,
    subscales: Vec<SubscaleView>,
    total_score: Option<TotalView>,
    min_items_required: String,
    error_on_insufficient_data: bool,
    output_columns: String,
}

#[derive(Serialize)]
struct ReverseView {
    enabled: bool,
    items: String,
    scale_max: String,
    scale_min: String,
    formula: String,
}

#[derive(Serialize)]
struct SubscaleView {
    name: String,
    items: String,
    scoring_method: &'static str,
    description: String,
}

#[derive(Serialize)]
struct TotalView {
    enabled: bool,
    name: String,
    description: String,
}

impl ModuleView {
    fn new(def: &QuestionnaireDefinition) -> Self {
        let mut imports = vec!["ItemSpec", "MissingPolicy", "QuestionnaireDefinition"];
        if def.reverse_scoring.is_some() {
            imports.push("ReverseScoring");
        }
        if !def.subscales.is_empty() {
            imports.extend(["ScoringMethod", "SubscaleDefinition"]);
        }
        if def.total_score.is_some() {
            imports.extend(["TotalMethod", "TotalScore"]);
        }
        imports.push("ValidationPolicy");
        imports.sort_unstable();

        // Doc comments are single-line.
        let title = format!("{} ({})", def.display_name(), def.questionnaire_name)
            .replace(['\r', '\n'], " ");

        ModuleView {
            title,
            imports,
            uses_item_format: def.items.item_format.is_some(),
            questionnaire_name: string_lit(&def.questionnaire_name),
            full_name: optional_string(def.full_name.as_deref()),
            description: optional_string(def.description.as_deref()),
            prefix: string_lit(&def.prefix),
            total_items: def.items.total_items,
            item_range: match def.items.item_range {
                Some([min, max]) => format!("Some([{min}, {max}])"),
                None => "None".to_string(),
            },
            item_format: match &def.items.item_format {
                Some(format) => format!(
                    "Some(ItemFormat::new({}, {}, {}))",
                    string_lit(format.head()),
                    format.width(),
                    string_lit(format.tail())
                ),
                None => "None".to_string(),
            },
            reverse_scoring: def.reverse_scoring.as_ref().map(|r| ReverseView {
                enabled: r.enabled,
                items: int_list(&r.items),
                scale_max: optional_int(r.scale_max),
                scale_min: optional_int(r.scale_min),
                formula: optional_string(r.formula.as_deref()),
            }),
            subscales: def
                .subscales
                .iter()
                .map(|s| SubscaleView {
                    name: string_lit(&s.name),
                    items: int_list(&s.items),
                    scoring_method: match s.scoring_method {
                        ScoringMethod::Mean => "Mean",
                        ScoringMethod::Sum => "Sum",
                    },
                    description: optional_string(s.description.as_deref()),
                })
                .collect(),
            total_score: def.total_score.as_ref().map(|t| TotalView {
                enabled: t.enabled,
                name: string_lit(&t.name),
                description: optional_string(t.description.as_deref()),
            }),
            min_items_required: optional_int(def.validation.min_items_required.map(i64::from)),
            error_on_insufficient_data: def.validation.error_on_insufficient_data,
            output_columns: match &def.output_columns {
                Some(columns) => format!(
                    "Some(vec![{}])",
                    columns
                        .iter()
                        .map(|c| format!("{}.to_string()", string_lit(c)))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                None => "None".to_string(),
            },
        }
    }
}

/// Debug formatting of `str` is a valid Rust string literal.
fn string_lit(s: &str) -> String {
    format!("{s:?}")
}

fn optional_string(s: Option<&str>) -> String {
    match s {
        Some(s) => format!("Some({}.to_string())", string_lit(s)),
        None => "None".to_string(),
    }
}

fn optional_int(n: Option<i64>) -> String {
    n.map_or_else(|| "None".to_string(), |n| format!("Some({n})"))
}

fn int_list(items: &[i64]) -> String {
    items.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
}
