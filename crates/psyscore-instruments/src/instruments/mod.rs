//! Built-in questionnaires, expressed as definitions and compiled at
//! registry construction like any user-supplied configuration.

pub mod bfi;
pub mod lot_r;
pub mod mspss;
pub mod panas;
pub mod swls;
pub mod ucla;

use crate::definition::QuestionnaireDefinition;

/// Every built-in definition.
pub fn all_definitions() -> Vec<&'static QuestionnaireDefinition> {
    vec![
        bfi::definition(),
        lot_r::definition(),
        mspss::definition(),
        panas::definition(),
        swls::definition(),
        ucla::definition(),
    ]
}

/// Look up a built-in definition by questionnaire name.
pub fn get_definition(name: &str) -> Option<&'static QuestionnaireDefinition> {
    all_definitions()
        .into_iter()
        .find(|d| d.questionnaire_name.eq_ignore_ascii_case(name))
}
