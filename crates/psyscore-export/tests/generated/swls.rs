//! Satisfaction With Life Scale (SWLS)
//!
//! Generated by `psyscore generate` from a validated configuration.
//! Regenerate rather than editing by hand.

use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ScoringMethod, SubscaleDefinition, ValidationPolicy};

pub fn definition() -> &'static QuestionnaireDefinition {
    static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
        std::sync::LazyLock::new(|| QuestionnaireDefinition {
            questionnaire_name: "SWLS".to_string(),
            full_name: Some("Satisfaction With Life Scale".to_string()),
            description: None,
            prefix: "SWLS_".to_string(),
            items: ItemSpec {
                total_items: 5,
                item_range: None,
                item_format: None,
            },
            reverse_scoring: None,
            subscales: vec![
                SubscaleDefinition {
                    name: "Total_Score".to_string(),
                    items: vec![1, 2, 3, 4, 5],
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
