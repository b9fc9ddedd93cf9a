//! Sample Questionnaire (SAMPLE)
//!
//! Generated by `psyscore generate` from a validated configuration.
//! Regenerate rather than editing by hand.

use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition, TotalMethod, TotalScore, ValidationPolicy};
use psyscore_instruments::item::ItemFormat;

pub fn definition() -> &'static QuestionnaireDefinition {
    static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
        std::sync::LazyLock::new(|| QuestionnaireDefinition {
            questionnaire_name: "SAMPLE".to_string(),
            full_name: Some("Sample Questionnaire".to_string()),
            description: Some("A sample questionnaire demonstrating the JSON configuration format".to_string()),
            prefix: "SAMPLE_".to_string(),
            items: ItemSpec {
                total_items: 10,
                item_range: Some([1, 10]),
                item_format: Some(ItemFormat::new("SAMPLE_", 2, "")),
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
                    name: "Positive_Subscale".to_string(),
                    items: vec![1, 2, 4, 5, 8],
                    scoring_method: ScoringMethod::Mean,
                    description: Some("Measures positive aspects".to_string()),
                },
                SubscaleDefinition {
                    name: "Negative_Subscale".to_string(),
                    items: vec![3, 6, 7, 9, 10],
                    scoring_method: ScoringMethod::Mean,
                    description: Some("Measures negative aspects".to_string()),
                },
            ],
            total_score: Some(TotalScore {
                enabled: true,
                method: TotalMethod::MeanOfSubscales,
                name: "Total_Score".to_string(),
                description: Some("Overall questionnaire score".to_string()),
            }),
            validation: ValidationPolicy {
                min_items_required: Some(8),
                handle_missing: MissingPolicy::SkipNa,
                error_on_insufficient_data: false,
            },
            output_columns: Some(vec!["SAMPLE_Positive_Subscale".to_string(), "SAMPLE_Negative_Subscale".to_string(), "SAMPLE_Total_Score".to_string()]),
        });
    &DEFINITION
}
