//! InterviewService - single entry point for hosts driving interviews.
//!
//! Wires the interview handlers to one store, one engine configuration and
//! one shared lock registry.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, QuestionnaireId};
use crate::domain::intake::{EngineSettings, IntakeEngine, Questionnaire, RawAnswer};
use crate::ports::InterviewStore;

use super::handlers::{
    CurrentQuestionView, GetCurrentQuestionHandler, GetCurrentQuestionQuery,
    GetFinishedQuestionnaireHandler, GetFinishedQuestionnaireQuery, InterviewLocks,
    StartInterviewCommand, StartInterviewHandler, StartInterviewResult, SubmitAnswerCommand,
    SubmitAnswerHandler, SubmitAnswerResult,
};

/// Facade over the interview command and query handlers.
pub struct InterviewService {
    start: StartInterviewHandler,
    submit: SubmitAnswerHandler,
    current: GetCurrentQuestionHandler,
    finished: GetFinishedQuestionnaireHandler,
}

impl InterviewService {
    pub fn new(store: Arc<dyn InterviewStore>, settings: EngineSettings) -> Self {
        let engine = IntakeEngine::with_settings(settings);
        let locks = InterviewLocks::new();
        Self {
            start: StartInterviewHandler::new(store.clone(), engine, locks.clone()),
            submit: SubmitAnswerHandler::new(store.clone(), engine, locks),
            current: GetCurrentQuestionHandler::new(store.clone(), engine),
            finished: GetFinishedQuestionnaireHandler::new(store),
        }
    }

    pub async fn start_interview(
        &self,
        cmd: StartInterviewCommand,
    ) -> Result<StartInterviewResult, DomainError> {
        self.start.handle(cmd).await
    }

    pub async fn submit_answer(
        &self,
        questionnaire_id: QuestionnaireId,
        answer: RawAnswer,
    ) -> Result<SubmitAnswerResult, DomainError> {
        self.submit
            .handle(SubmitAnswerCommand {
                questionnaire_id,
                answer,
            })
            .await
    }

    pub async fn current_question(
        &self,
        questionnaire_id: QuestionnaireId,
    ) -> Result<CurrentQuestionView, DomainError> {
        self.current
            .handle(GetCurrentQuestionQuery { questionnaire_id })
            .await
    }

    pub async fn finished_questionnaire(
        &self,
        questionnaire_id: QuestionnaireId,
    ) -> Result<Questionnaire, DomainError> {
        self.finished
            .handle(GetFinishedQuestionnaireQuery { questionnaire_id })
            .await
    }
}
