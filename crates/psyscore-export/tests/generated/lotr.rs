//! Life Orientation Test - Revised (LOTR)
//!
//! Generated by `psyscore generate` from a validated configuration.
//! Regenerate rather than editing by hand.

use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition, ValidationPolicy};
use psyscore_instruments::item::ItemFormat;

pub fn definition() -> &'static QuestionnaireDefinition {
    static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition> =
        std::sync::LazyLock::new(|| QuestionnaireDefinition {
            questionnaire_name: "LOTR".to_string(),
            full_name: Some("Life Orientation Test - Revised".to_string()),
            description: Some("Dispositional optimism".to_string()),
            prefix: "LOT_R_".to_string(),
            items: ItemSpec {
                total_items: 10,
                item_range: None,
                item_format: Some(ItemFormat::new("LOT_R_", 0, "")),
            },
            reverse_scoring: Some(ReverseScoring {
                enabled: true,
                items: vec![3, 7, 9],
                scale_max: Some(4),
                scale_min: Some(0),
                formula: None,
            }),
            subscales: vec![
                SubscaleDefinition {
                    name: "Total_Score".to_string(),
                    items: vec![1, 3, 4, 7, 9, 10],
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
