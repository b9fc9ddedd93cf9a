use psyscore_instruments::definition::QuestionnaireDefinition;
use psyscore_instruments::instruments::lot_r;
use psyscore_instruments::validate::validate;

use psyscore_export::registration::{MANIFEST_FILE, MOD_FILE, Manifest, write_module};
use psyscore_export::render::{module_name, render_module};

fn rendered(def: QuestionnaireDefinition) -> psyscore_export::render::RenderedModule {
    render_module(&validate(def).unwrap()).unwrap()
}

#[test]
fn module_names_are_valid_identifiers() {
    assert_eq!(module_name("BFI").unwrap(), "bfi");
    assert_eq!(module_name("LOT-R (revised)").unwrap(), "lot_r_revised");
    assert_eq!(module_name("16PF").unwrap(), "q_16pf");
    assert_eq!(module_name("Type").unwrap(), "q_type");
    assert!(module_name("--").is_err());
}

#[test]
fn sample_module_declares_every_section() {
    let module = rendered(QuestionnaireDefinition::sample());
    let source = &module.source;

    assert_eq!(module.module, "sample");
    assert!(source.starts_with("//! Sample Questionnaire (SAMPLE)\n"));
    assert!(source.contains(
        "use psyscore_instruments::definition::{ItemSpec, MissingPolicy, QuestionnaireDefinition, ReverseScoring, ScoringMethod, SubscaleDefinition, TotalMethod, TotalScore, ValidationPolicy};"
    ));
    assert!(source.contains("use psyscore_instruments::item::ItemFormat;"));
    assert!(source.contains("item_format: Some(ItemFormat::new(\"SAMPLE_\", 2, \"\")),"));
    assert!(source.contains("items: vec![3, 7],"));
    assert!(source.contains("name: \"Negative_Subscale\".to_string(),"));
    assert!(source.contains("min_items_required: Some(8),"));
    assert!(source.contains("\"SAMPLE_Total_Score\".to_string()"));
    assert!(source.contains("static DEFINITION: std::sync::LazyLock<QuestionnaireDefinition>"));
}

#[test]
fn optional_sections_render_as_none() {
    let module = rendered(
        QuestionnaireDefinition::from_json(
            r#"{
                "questionnaire_name": "Mini",
                "prefix": "MINI_",
                "items": { "total_items": 2 },
                "subscales": [ { "name": "A", "items": [1, 2] } ]
            }"#,
        )
        .unwrap(),
    );

    assert!(module.source.contains("reverse_scoring: None,"));
    assert!(module.source.contains("total_score: None,"));
    assert!(module.source.contains("output_columns: None,"));
    assert!(!module.source.contains("ItemFormat"));
    assert!(!module.source.contains("TotalMethod"));
    assert_eq!(module.record.score_columns, vec!["MINI_A".to_string()]);
}

#[test]
fn strings_are_escaped() {
    let mut def = QuestionnaireDefinition::sample();
    def.description = Some("says \"hi\"\nand leaves".to_string());

    let module = rendered(def);
    assert!(module.source.contains(r#"description: Some("says \"hi\"\nand leaves".to_string()),"#));
}

#[test]
fn write_module_updates_manifest_and_mod_rs() {
    let dir = tempfile::tempdir().unwrap();

    let first = write_module(dir.path(), &rendered(QuestionnaireDefinition::sample())).unwrap();
    assert!(first.replaced.is_none());
    assert!(first.module_path.ends_with("sample.rs"));
    assert!(first.config_path.ends_with("sample.json"));

    write_module(dir.path(), &rendered(lot_r::definition().clone())).unwrap();

    let manifest = Manifest::load(dir.path()).unwrap();
    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.get("LOT_R_").map(|r| r.module.as_str()), Some("lotr"));

    let mod_rs = std::fs::read_to_string(dir.path().join(MOD_FILE)).unwrap();
    assert!(mod_rs.contains("pub mod lotr;\npub mod sample;"));
    assert!(mod_rs.contains("        lotr::definition(),\n        sample::definition(),"));
    assert!(dir.path().join(MANIFEST_FILE).exists());
}

#[test]
fn same_prefix_replaces_registration() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), &rendered(QuestionnaireDefinition::sample())).unwrap();

    let mut renamed = QuestionnaireDefinition::sample();
    renamed.questionnaire_name = "SAMPLE2".to_string();
    let second = write_module(dir.path(), &rendered(renamed)).unwrap();

    assert_eq!(
        second.replaced.map(|r| r.questionnaire_name),
        Some("SAMPLE".to_string())
    );
    let manifest = Manifest::load(dir.path()).unwrap();
    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest.get("SAMPLE_").unwrap().module, "sample2");

    let mod_rs = std::fs::read_to_string(dir.path().join(MOD_FILE)).unwrap();
    assert!(mod_rs.contains("pub mod sample2;"));
    assert!(!mod_rs.contains("pub mod sample;"));

    assert!(!dir.path().join("sample.rs").exists());
    assert!(!dir.path().join("sample.json").exists());
    assert!(dir.path().join("sample2.rs").exists());
    assert!(dir.path().join("sample2.json").exists());
}

#[test]
fn empty_directory_has_empty_manifest() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Manifest::load(dir.path()).unwrap().is_empty());
}
