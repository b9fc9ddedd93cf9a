//! psyscore-export
//!
//! Everything that leaves the process: CSV response tables, rendered Rust
//! modules for validated questionnaire definitions and the registration
//! manifest that ties generated modules together.

pub mod csv;
pub mod definitions;
pub mod error;
pub mod registration;
pub mod render;
