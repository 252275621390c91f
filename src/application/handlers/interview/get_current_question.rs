//! GetCurrentQuestionHandler - Query handler for the question to ask next.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, QuestionnaireId};
use crate::domain::intake::{IntakeEngine, InterviewProgress, Question};
use crate::ports::InterviewStore;

use super::ensure_known_question;

/// Query for the current question of an interview.
#[derive(Debug, Clone, Copy)]
pub struct GetCurrentQuestionQuery {
    pub questionnaire_id: QuestionnaireId,
}

/// Question to render plus where the interview stands.
#[derive(Debug, Clone)]
pub struct CurrentQuestionView {
    /// `None` once the interview is finished.
    pub question: Option<&'static Question>,
    pub progress: InterviewProgress,
}

/// Handler for reading the current question.
pub struct GetCurrentQuestionHandler {
    store: Arc<dyn InterviewStore>,
    engine: IntakeEngine,
}

impl GetCurrentQuestionHandler {
    pub fn new(store: Arc<dyn InterviewStore>, engine: IntakeEngine) -> Self {
        Self { store, engine }
    }

    pub async fn handle(&self, query: GetCurrentQuestionQuery) -> Result<CurrentQuestionView, DomainError> {
        let state = self.store.load(query.questionnaire_id).await?;
        ensure_known_question(&state)?;
        Ok(CurrentQuestionView {
            question: self.engine.current_question(&state),
            progress: self.engine.progress(&state),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::interview::test_support::started_interview;
    use crate::domain::foundation::{ErrorCode, Sex};
    use crate::domain::intake::QuestionId;

    #[tokio::test]
    async fn returns_question_and_progress() {
        let (store, state) = started_interview(Sex::Female).await;
        let handler = GetCurrentQuestionHandler::new(store, IntakeEngine::new());

        let view = handler
            .handle(GetCurrentQuestionQuery {
                questionnaire_id: state.questionnaire_id(),
            })
            .await
            .unwrap();

        assert_eq!(view.question.unwrap().id, "screen_osteo");
        assert_eq!(view.progress.domain_total, 14);
        assert!(!view.progress.finished);
    }

    #[tokio::test]
    async fn unknown_current_question_is_an_internal_error() {
        let (store, mut state) = started_interview(Sex::Male).await;
        state.current_question = Some(QuestionId::from("retired_question".to_string()));
        store.save(&state).await.unwrap();
        let handler = GetCurrentQuestionHandler::new(store, IntakeEngine::new());

        let err = handler
            .handle(GetCurrentQuestionQuery {
                questionnaire_id: state.questionnaire_id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(
            err.details.get("question_id").map(String::as_str),
            Some("retired_question")
        );
    }

    #[tokio::test]
    async fn unknown_questionnaire_is_not_found() {
        let (store, _) = started_interview(Sex::Male).await;
        let handler = GetCurrentQuestionHandler::new(store, IntakeEngine::new());

        let err = handler
            .handle(GetCurrentQuestionQuery {
                questionnaire_id: QuestionnaireId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::QuestionnaireNotFound);
    }
}
