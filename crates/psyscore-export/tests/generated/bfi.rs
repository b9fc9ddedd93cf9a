//! Big Five Inventory (BFI)
//!
//! Generated by `psyscore generate` from a validated configuration.
//! Regenerate rather than editing by hand.

use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition, ValidationPolicy};

pub fn definition() -> &'static QuestionnaireDefinition {
    static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
        std::sync::LazyLock::new(|| QuestionnaireDefinition {
            questionnaire_name: "BFI".to_string(),
            full_name: Some("Big Five Inventory".to_string()),
            description: Some("Extraversion, Agreeableness, Conscientiousness, Neuroticism and Openness".to_string()),
            prefix: "BFI_".to_string(),
            items: ItemSpec {
                total_items: 44,
                item_range: None,
                item_format: None,
            },
            reverse_scoring: Some(ReverseScoring {
                enabled: true,
                items: vec![6, 21, 31, 2, 12, 27, 37, 8, 18, 23, 43, 9, 24, 34, 35, 41],
                scale_max: Some(5),
                scale_min: None,
                formula: None,
            }),
            subscales: vec![
                SubscaleDefinition {
                    name: "Extraversion".to_string(),
                    items: vec![1, 6, 11, 16, 21, 26, 31, 36],
                    scoring_method: ScoringMethod::Mean,
                    description: None,
                },
                SubscaleDefinition {
                    name: "Agreeableness".to_string(),
                    items: vec![2, 7, 12, 17, 22, 27, 32, 37, 42],
                    scoring_method: ScoringMethod::Mean,
                    description: None,
                },
                SubscaleDefinition {
                    name: "Conscientiousness".to_string(),
                    items: vec![3, 8, 13, 18, 23, 28, 33, 38, 43],
                    scoring_method: ScoringMethod::Mean,
                    description: None,
                },
                SubscaleDefinition {
                    name: "Neuroticism".to_string(),
                    items: vec![4, 9, 14, 19, 24, 29, 34, 39],
                    scoring_method: ScoringMethod::Mean,
                    description: None,
                },
                SubscaleDefinition {
                    name: "Openness".to_string(),
                    items: vec![5, 10, 15, 20, 25, 30, 35, 40, 41, 44],
                    scoring_method: ScoringMethod::Mean,
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
