//! Multidimensional Scale of Perceived Social Support (MSPSS)
//!
//! Generated by `psyscore generate` from a validated configuration.
//! Regenerate rather than editing by hand.

use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ScoringMethod, SubscaleDefinition, TotalMethod, TotalScore, ValidationPolicy};

pub fn definition() -> &'static QuestionnaireDefinition {
    static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
        std::sync::LazyLock::new(|| QuestionnaireDefinition {
            questionnaire_name: "MSPSS".to_string(),
            full_name: Some("Multidimensional Scale of Perceived Social Support".to_string()),
            description: None,
            prefix: "MSPSS_".to_string(),
            items: ItemSpec {
                total_items: 12,
                item_range: None,
                item_format: None,
            },
            reverse_scoring: None,
            subscales: vec![
                SubscaleDefinition {
                    name: "Family_Score".to_string(),
                    items: vec![3, 4, 8, 11],
                    scoring_method: ScoringMethod::Mean,
                    description: None,
                },
                SubscaleDefinition {
                    name: "Friends_Score".to_string(),
                    items: vec![6, 7, 9, 12],
                    scoring_method: ScoringMethod::Mean,
                    description: None,
                },
                SubscaleDefinition {
                    name: "Significant_Others_Score".to_string(),
                    items: vec![1, 2, 5, 10],
                    scoring_method: ScoringMethod::Mean,
                    description: None,
                },
            ],
            total_score: Some(TotalScore {
                enabled: true,
                method: TotalMethod::MeanOfSubscales,
                name: "Total_Score".to_string(),
                description: None,
            }),
            validation: ValidationPolicy {
                min_items_required: None,
                handle_missing: MissingPolicy::SkipNa,
                error_on_insufficient_data: false,
            },
            output_columns: None,
        });
    &DEFINITION
}
