use crate::definition::{
    ItemSpec, QuestionnaireDefinition, ScoringMethod, SubscaleDefinition, TotalMethod, TotalScore,
    ValidationPolicy,
};

/// MSPSS: Multidimensional Scale of Perceived Social Support.
/// Twelve items on a 1–7 scale. Family, Friends and Significant Others are
/// item means; the total is the mean of the three subscales.
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
                SubscaleDefinition::new("Family_Score", &[3, 4, 8, 11], ScoringMethod::Mean),
                SubscaleDefinition::new("Friends_Score", &[6, 7, 9, 12], ScoringMethod::Mean),
                SubscaleDefinition::new("Significant_Others_Score", &[1, 2, 5, 10], ScoringMethod::Mean),
            ],
            total_score: Some(TotalScore {
                enabled: true,
                method: TotalMethod::MeanOfSubscales,
                name: "Total_Score".to_string(),
                description: None,
            }),
            validation: ValidationPolicy::default(),
            output_columns: None,
        });
    &DEFINITION
}
