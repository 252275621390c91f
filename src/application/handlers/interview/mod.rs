//! Interview handlers.
//!
//! Commands:
//! - `StartInterviewHandler` - Opens a questionnaire and stores the first state
//! - `SubmitAnswerHandler` - Applies one answer, serialized per questionnaire
//!
//! Queries:
//! - `GetCurrentQuestionHandler` - Question to ask next plus progress
//! - `GetFinishedQuestionnaireHandler` - The dossier, once the interview is done

mod get_current_question;
mod get_finished_questionnaire;
mod interview_locks;
mod start_interview;
mod submit_answer;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::intake::{EngineState, QuestionRegistry};

pub use get_current_question::{CurrentQuestionView, GetCurrentQuestionHandler, GetCurrentQuestionQuery};
pub use get_finished_questionnaire::{GetFinishedQuestionnaireHandler, GetFinishedQuestionnaireQuery};
pub use interview_locks::InterviewLocks;
pub use start_interview::{StartInterviewCommand, StartInterviewHandler, StartInterviewResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};

/// Rejects a stored state whose current question is missing from the registry.
///
/// The engine treats such a state as a no-op, so it would otherwise look
/// finished to callers while `is_finished` stays false.
pub(crate) fn ensure_known_question(state: &EngineState) -> Result<(), DomainError> {
    match &state.current_question {
        Some(id) if QuestionRegistry::global().question(id).is_none() => Err(DomainError::new(
            ErrorCode::InternalError,
            format!("Interview is stuck on unknown question {}", id),
        )
        .with_detail("questionnaire_id", state.questionnaire_id().to_string())
        .with_detail("question_id", id.to_string())),
        _ => Ok(()),
    }
}
