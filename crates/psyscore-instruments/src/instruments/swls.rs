use crate::definition::{
    ItemSpec, QuestionnaireDefinition, ScoringMethod, SubscaleDefinition, ValidationPolicy,
};

/// SWLS: Satisfaction With Life Scale. Sum of five 1–7 ratings.
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
            subscales: vec![SubscaleDefinition::new(
                "Total_Score",
                &[1, 2, 3, 4, 5],
                ScoringMethod::Sum,
            )],
            total_score: None,
            validation: ValidationPolicy::default(),
            output_columns: None,
        });
    &DEFINITION
}
