//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the intake domain.

mod errors;
mod ids;
mod sex;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnswerId, CaseId, QuestionnaireId, RespondentId};
pub use sex::Sex;
pub use timestamp::Timestamp;
