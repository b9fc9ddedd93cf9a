//! Positive and Negative Affect Schedule (PANAS)
//!
//! Generated by `psyscore generate` from a validated configuration.
//! Regenerate rather than editing by hand.

use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ScoringMethod, SubscaleDefinition, ValidationPolicy};

pub fn definition() -> &'static QuestionnaireDefinition {
    static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
        std::sync::LazyLock::new(|| QuestionnaireDefinition {
            questionnaire_name: "PANAS".to_string(),
            full_name: Some("Positive and Negative Affect Schedule".to_string()),
            description: None,
            prefix: "PANAS_".to_string(),
            items: ItemSpec {
                total_items: 20,
                item_range: None,
                item_format: None,
            },
            reverse_scoring: None,
            subscales: vec![
                SubscaleDefinition {
                    name: "Positive_Affect_Score".to_string(),
                    items: vec![1, 3, 5, 9, 10, 12, 14, 16, 17, 19],
                    scoring_method: ScoringMethod::Sum,
                    description: None,
                },
                SubscaleDefinition {
                    name: "Negative_Affect_Score".to_string(),
                    items: vec![2, 4, 6, 7, 8, 11, 13, 15, 18, 20],
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
