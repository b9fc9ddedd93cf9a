use crate::definition::{
    ItemSpec, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition,
    ValidationPolicy,
};

/// BFI: Big Five Inventory.
/// 44 items on a 1–5 agreement scale; five mean subscales, no total.
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
                SubscaleDefinition::new("Extraversion", &[1, 6, 11, 16, 21, 26, 31, 36], ScoringMethod::Mean),
                SubscaleDefinition::new("Agreeableness", &[2, 7, 12, 17, 22, 27, 32, 37, 42], ScoringMethod::Mean),
                SubscaleDefinition::new("Conscientiousness", &[3, 8, 13, 18, 23, 28, 33, 38, 43], ScoringMethod::Mean),
                SubscaleDefinition::new("Neuroticism", &[4, 9, 14, 19, 24, 29, 34, 39], ScoringMethod::Mean),
                SubscaleDefinition::new("Openness", &[5, 10, 15, 20, 25, 30, 35, 40, 41, 44], ScoringMethod::Mean),
            ],
            total_score: None,
            validation: ValidationPolicy::default(),
            output_columns: None,
        });
    &DEFINITION
}
