//! SubmitAnswerHandler - Command handler applying one answer to an interview.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DomainError, QuestionnaireId};
use crate::domain::intake::{EngineState, IntakeEngine, InterviewProgress, Question, RawAnswer};
use crate::ports::InterviewStore;

use super::{ensure_known_question, InterviewLocks};

/// Command to answer the current question of an interview.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub questionnaire_id: QuestionnaireId,
    pub answer: RawAnswer,
}

/// Result of applying an answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub state: EngineState,
    pub next_question: Option<&'static Question>,
    pub progress: InterviewProgress,
}

/// Handler for submitting answers.
///
/// Load, apply and save run under the questionnaire's lock so concurrent
/// submissions for one interview never apply to the same stale state.
pub struct SubmitAnswerHandler {
    store: Arc<dyn InterviewStore>,
    engine: IntakeEngine,
    locks: InterviewLocks,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn InterviewStore>, engine: IntakeEngine, locks: InterviewLocks) -> Self {
        Self {
            store,
            engine,
            locks,
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, DomainError> {
        let id = cmd.questionnaire_id;
        let guard = self.locks.acquire(id).await;
        let result = self.apply_locked(cmd).await;
        drop(guard);
        self.locks.release(id).await;
        result
    }

    async fn apply_locked(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, DomainError> {
        let state = self.store.load(cmd.questionnaire_id).await?;
        ensure_known_question(&state)?;
        let next = self.engine.apply_answer(&state, cmd.answer);
        self.store.save(&next).await?;

        debug!(
            questionnaire_id = %cmd.questionnaire_id,
            answers = next.questionnaire.answers.len(),
            "Answer applied"
        );

        Ok(SubmitAnswerResult {
            next_question: self.engine.current_question(&next),
            progress: self.engine.progress(&next),
            state: next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::interview::test_support::{
        started_interview, FailingInterviewStore,
    };
    use crate::domain::foundation::{ErrorCode, Sex};
    use crate::domain::intake::QuestionId;

    fn handler(store: Arc<dyn InterviewStore>) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(store, IntakeEngine::new(), InterviewLocks::new())
    }

    #[tokio::test]
    async fn answer_is_applied_and_persisted() {
        let (store, state) = started_interview(Sex::Male).await;
        let id = state.questionnaire_id();

        let result = handler(store.clone())
            .handle(SubmitAnswerCommand {
                questionnaire_id: id,
                answer: RawAnswer::new(true),
            })
            .await
            .unwrap();

        assert_eq!(result.next_question.unwrap().id, "osteo_description");
        assert_eq!(result.progress.cases_declared, 1);
        let stored = store.load(id).await.unwrap();
        assert_eq!(stored, result.state);
    }

    #[tokio::test]
    async fn concurrent_submissions_are_serialized() {
        let (store, state) = started_interview(Sex::Male).await;
        let id = state.questionnaire_id();
        let handler = Arc::new(handler(store.clone()));

        let tasks: Vec<_> = (0..5)
            .map(|_| {
                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    handler
                        .handle(SubmitAnswerCommand {
                            questionnaire_id: id,
                            answer: RawAnswer::new(false),
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = store.load(id).await.unwrap();
        assert_eq!(stored.questionnaire.answers.len(), 5);
        let sequences: Vec<usize> = stored.questionnaire.answers.iter().map(|a| a.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn no_lock_outlives_a_submission() {
        let (store, state) = started_interview(Sex::Male).await;
        let id = state.questionnaire_id();
        let locks = InterviewLocks::new();
        let handler = SubmitAnswerHandler::new(store, IntakeEngine::new(), locks.clone());

        let mut finished = false;
        while !finished {
            let result = handler
                .handle(SubmitAnswerCommand {
                    questionnaire_id: id,
                    answer: RawAnswer::new(false),
                })
                .await
                .unwrap();
            finished = result.progress.finished;
            assert_eq!(locks.len().await, 0);
        }

        let err = handler
            .handle(SubmitAnswerCommand {
                questionnaire_id: QuestionnaireId::new(),
                answer: RawAnswer::new(true),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionnaireNotFound);
        assert_eq!(locks.len().await, 0);
    }

    #[tokio::test]
    async fn unknown_current_question_is_rejected_without_journaling() {
        let (store, mut state) = started_interview(Sex::Male).await;
        let id = state.questionnaire_id();
        state.current_question = Some(QuestionId::from("retired_question".to_string()));
        store.save(&state).await.unwrap();

        let err = handler(store.clone())
            .handle(SubmitAnswerCommand {
                questionnaire_id: id,
                answer: RawAnswer::new(true),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
        let stored = store.load(id).await.unwrap();
        assert!(stored.questionnaire.answers.is_empty());
        assert!(!stored.is_finished());
    }

    #[tokio::test]
    async fn unknown_questionnaire_is_not_found() {
        let (store, _) = started_interview(Sex::Male).await;

        let err = handler(store)
            .handle(SubmitAnswerCommand {
                questionnaire_id: QuestionnaireId::new(),
                answer: RawAnswer::new(true),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::QuestionnaireNotFound);
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let err = handler(Arc::new(FailingInterviewStore))
            .handle(SubmitAnswerCommand {
                questionnaire_id: QuestionnaireId::new(),
                answer: RawAnswer::new(true),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
