use crate::definition::{
    ItemSpec, QuestionnaireDefinition, ScoringMethod, SubscaleDefinition, ValidationPolicy,
};

/// PANAS-SF: Positive and Negative Affect Schedule, short form.
/// Twenty items on a 1–5 scale, summed into positive and negative affect.
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
                SubscaleDefinition::new(
                    "Positive_Affect_Score",
                    &[1, 3, 5, 9, 10, 12, 14, 16, 17, 19],
                    ScoringMethod::Sum,
                ),
                SubscaleDefinition::new(
                    "Negative_Affect_Score",
                    &[2, 4, 6, 7, 8, 11, 13, 15, 18, 20],
                    ScoringMethod::Sum,
                ),
            ],
            total_score: None,
            validation: ValidationPolicy::default(),
            output_columns: None,
        });
    &DEFINITION
}
