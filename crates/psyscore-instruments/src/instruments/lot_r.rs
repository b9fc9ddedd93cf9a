use crate::definition::{
    ItemSpec, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition,
    ValidationPolicy,
};
use crate::item::ItemFormat;

/// LOT-R: Life Orientation Test, Revised.
/// Ten unpadded items (`LOT_R_1`..`LOT_R_10`) on a 0–4 scale. Items 2, 5, 6
/// and 8 are fillers and do not contribute to the total.
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
                item_format: Some(ItemFormat::padded("LOT_R_", 0)),
            },
            // 0-4 scale: reversed value is 4 - v.
            reverse_scoring: Some(ReverseScoring {
                enabled: true,
                items: vec![3, 7, 9],
                scale_max: Some(4),
                scale_min: Some(0),
                formula: None,
            }),
            subscales: vec![SubscaleDefinition::new(
                "Total_Score",
                &[1, 3, 4, 7, 9, 10],
                ScoringMethod::Sum,
            )],
            total_score: None,
            validation: ValidationPolicy::default(),
            output_columns: None,
        });
    &DEFINITION
}
