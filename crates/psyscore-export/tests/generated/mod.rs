//! Generated questionnaire modules. Rewritten on every registration.

pub mod bfi;
pub mod lotr;
pub mod mspss;
pub mod panas;
pub mod sample;
pub mod swls;
pub mod ucla;

use psyscore_instruments::definition::QuestionnaireDefinition;

/// Every registered definition, in prefix order.
pub fn all_definitions() -> Vec<&'static QuestionnaireDefinition> {
    vec![
        bfi::definition(),
        lotr::definition(),
        mspss::definition(),
        panas::definition(),
        sample::definition(),
        swls::definition(),
        ucla::definition(),
    ]
}
