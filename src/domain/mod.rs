//! Domain layer containing the interview engine and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, sex, errors)
//! - `intake` - Questionnaire, cases, question catalogue and the transition engine

pub mod foundation;
pub mod intake;
