//! UCLA Loneliness Scale (UCLA)
//!
//! Generated by `psyscore generate` from a validated configuration.
//! Regenerate rather than editing by hand.

use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition, ValidationPolicy};

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
            subscales: vec![
                SubscaleDefinition {
                    name: "Total_Score".to_string(),
                    items: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20],
                    scoring_method: ScoringMethod::Sum,
                    description: None,
                },
            ],
            total_score: None,
            validation: ValidationPolicy {
                min_items_required: None,
                handle_missing: MissingPolicy::SkipNa,
                error_on_insufficient_data: false,
            },
            output_columns: None,
        });
    &DEFINITION
}
