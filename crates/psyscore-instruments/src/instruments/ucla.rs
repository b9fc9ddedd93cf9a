use crate::definition::{
    ItemSpec, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition,
    ValidationPolicy,
};

/// UCLA Loneliness Scale (Version 3).
/// Twenty items on a 1–4 scale; positively worded items are reversed
/// (5 - v) before summing into a single total.
pub fn definition() -> &'static QuestionnaireDefinition {
    static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
        std::sync::LazyLock::new(|| QuestionnaireDefinition {
            questionnaire_name: "UCLA".to_string(),
            full_name: Some("UCLA Loneliness Scale".to_string()),
            description: None,
            prefix: "UCLA_".to_string(),
            items: ItemSpec {
                total_items: 20,
                item_range: None,
                item_format: None,
            },
            reverse_scoring: Some(ReverseScoring {
                enabled: true,
                items: vec![1, 5, 6, 9, 10, 15, 16, 19, 20],
                scale_max: Some(4),
                scale_min: None,
                formula: None,
            }),
            subscales: vec![SubscaleDefinition::new(
                "Total_Score",
                &(1..=20).collect::<Vec<i64>>(),
                ScoringMethod::Sum,
            )],
            total_score: None,
            validation: ValidationPolicy::default(),
            output_columns: None,
        });
    &DEFINITION
}
