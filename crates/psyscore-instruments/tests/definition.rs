use psyscore_instruments::ConfigError;
use psyscore_instruments::definition::{QuestionnaireDefinition, ScoringMethod};

const MINIMAL: &str = r#"{
    "questionnaire_name": "TEST",
    "prefix": "Q_",
    "items": { "total_items": 5 },
    "subscales": [ { "name": "S1", "items": [1, 2, 3] } ]
}"#;

#[test]
fn minimal_config_fills_defaults() {
    let def = QuestionnaireDefinition::from_json(MINIMAL).unwrap();

    assert_eq!(def.questionnaire_name, "TEST");
    assert_eq!(def.display_name(), "TEST");
    assert_eq!(def.item_range(), (1, 5));
    assert_eq!(def.item_format().column_name(3), "Q_03");
    assert_eq!(def.subscales[0].scoring_method, ScoringMethod::Mean);
    assert!(def.reversal().is_none());
    assert!(def.total().is_none());
    assert_eq!(def.output_columns(), vec!["Q_S1".to_string()]);
}

#[test]
fn missing_required_field_is_named() {
    let err = QuestionnaireDefinition::from_json(
        r#"{ "questionnaire_name": "X", "items": { "total_items": 2 }, "subscales": [] }"#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::MissingField(ref f) if f == "prefix"));
}

#[test]
fn wrong_type_reports_field_path() {
    let json = MINIMAL.replace("[1, 2, 3]", r#""1,2,3""#);
    let err = QuestionnaireDefinition::from_json(&json).unwrap_err();

    match err {
        ConfigError::Type { field, .. } => assert_eq!(field, "subscales[0].items"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_scoring_method_is_rejected() {
    let json = MINIMAL.replace(r#""items": [1, 2, 3]"#, r#""items": [1, 2, 3], "scoring_method": "median""#);
    let err = QuestionnaireDefinition::from_json(&json).unwrap_err();

    assert!(matches!(err, ConfigError::Type { ref field, .. } if field == "subscales[0].scoring_method"));
}

#[test]
fn non_positive_total_items_is_rejected() {
    let json = MINIMAL.replace(r#""total_items": 5"#, r#""total_items": 0"#);
    let err = QuestionnaireDefinition::from_json(&json).unwrap_err();

    assert!(matches!(err, ConfigError::Type { ref field, .. } if field == "items.total_items"));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = QuestionnaireDefinition::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn custom_item_format_and_total() {
    let json = r#"{
        "questionnaire_name": "LOT",
        "full_name": "Life Orientation",
        "prefix": "LOT_R_",
        "items": { "total_items": 10, "item_format": "LOT_R_{}" },
        "reverse_scoring": { "enabled": true, "items": [3], "scale_max": 4, "scale_min": 0 },
        "subscales": [
            { "name": "A", "items": [1, 3], "scoring_method": "sum" },
            { "name": "B", "items": [4] }
        ],
        "total_score": { "enabled": true, "method": "mean_of_subscales" }
    }"#;
    let def = QuestionnaireDefinition::from_json(json).unwrap();

    assert_eq!(def.display_name(), "Life Orientation");
    assert_eq!(def.item_format().column_name(7), "LOT_R_7");
    assert_eq!(def.subscales[0].scoring_method, ScoringMethod::Sum);
    let reversal = def.reversal().unwrap();
    assert_eq!((reversal.scale_min(), reversal.scale_max()), (0, 4));
    assert_eq!(def.total_column().as_deref(), Some("LOT_R_Total_Score"));
    assert_eq!(
        def.output_columns(),
        vec!["LOT_R_A".to_string(), "LOT_R_B".to_string(), "LOT_R_Total_Score".to_string()]
    );
}

#[test]
fn disabled_sections_are_ignored() {
    let json = MINIMAL.replace(
        r#""subscales""#,
        r#""reverse_scoring": { "enabled": false, "items": [2] },
           "total_score": { "enabled": false },
           "subscales""#,
    );
    let def = QuestionnaireDefinition::from_json(&json).unwrap();

    assert!(def.reversal().is_none());
    assert!(def.total_column().is_none());
}

#[test]
fn pretty_json_parses_back() {
    let def = QuestionnaireDefinition::from_json(MINIMAL).unwrap();
    let json = def.to_json_pretty().unwrap();
    assert_eq!(QuestionnaireDefinition::from_json(&json).unwrap(), def);
}

#[test]
fn sample_survives_json_and_validation() {
    let sample = QuestionnaireDefinition::sample();
    let parsed = QuestionnaireDefinition::from_json(&sample.to_json_pretty().unwrap()).unwrap();

    assert_eq!(parsed, sample);
    assert!(psyscore_instruments::validate::check(&parsed).issues.is_empty());
}

#[test]
fn item_format_placeholders() {
    use psyscore_instruments::item::ItemFormat;

    let padded = ItemFormat::parse("BFI_{:02d}").unwrap();
    assert_eq!(padded.column_name(7), "BFI_07");
    assert_eq!(padded.index_of("BFI_07"), Some(7));
    assert_eq!(padded.index_of("BFI_7"), None);
    assert_eq!(padded.to_string(), "BFI_{:02d}");

    let plain = ItemFormat::parse("Q{:d}_raw").unwrap();
    assert_eq!(plain.column_name(12), "Q12_raw");
    assert_eq!(plain.index_of("Q12_raw"), Some(12));

    assert!(ItemFormat::parse("Q_").is_err());
    assert!(ItemFormat::parse("Q_{}_{}").is_err());
    assert!(ItemFormat::parse("Q_{:x}").is_err());
}
