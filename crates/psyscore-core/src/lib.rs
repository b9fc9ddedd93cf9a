//! psyscore-core
//!
//! Shared vocabulary of the psyscore system: the in-memory response table
//! that every questionnaire scores against. No I/O happens here.

pub mod error;
pub mod table;

pub use crate::error::CoreError;
pub use crate::table::{Cell, Column, ResponseTable};
