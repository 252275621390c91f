//! StartInterviewHandler - Command handler for opening a new interview.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{
    DomainError, ErrorCode, QuestionnaireId, RespondentId, Sex, Timestamp,
};
use crate::domain::intake::{ConsentRecord, EngineState, IntakeEngine, Question, Questionnaire};
use crate::ports::InterviewStore;

use super::InterviewLocks;

/// Command to start a new interview.
#[derive(Debug, Clone)]
pub struct StartInterviewCommand {
    /// Pre-allocated id; a fresh one is generated when absent.
    pub questionnaire_id: Option<QuestionnaireId>,
    pub respondent_id: RespondentId,
    pub respondent_sex: Sex,
    pub consent_accepted: bool,
    pub started_at: Timestamp,
}

/// Result of a successful start.
#[derive(Debug, Clone)]
pub struct StartInterviewResult {
    pub state: EngineState,
    pub first_question: Option<&'static Question>,
}

/// Handler for starting interviews.
pub struct StartInterviewHandler {
    store: Arc<dyn InterviewStore>,
    engine: IntakeEngine,
    locks: InterviewLocks,
}

impl StartInterviewHandler {
    pub fn new(store: Arc<dyn InterviewStore>, engine: IntakeEngine, locks: InterviewLocks) -> Self {
        Self {
            store,
            engine,
            locks,
        }
    }

    pub async fn handle(&self, cmd: StartInterviewCommand) -> Result<StartInterviewResult, DomainError> {
        if !cmd.consent_accepted {
            return Err(DomainError::new(
                ErrorCode::ConsentMissing,
                "Respondent consent is required before the interview",
            ));
        }

        let id = cmd.questionnaire_id.unwrap_or_default();
        let guard = self.locks.acquire(id).await;
        let result = self.start_locked(id, cmd).await;
        drop(guard);
        self.locks.release(id).await;
        result
    }

    async fn start_locked(
        &self,
        id: QuestionnaireId,
        cmd: StartInterviewCommand,
    ) -> Result<StartInterviewResult, DomainError> {
        if self.store.exists(id).await? {
            return Err(DomainError::new(
                ErrorCode::QuestionnaireAlreadyExists,
                format!("Questionnaire {} already exists", id),
            )
            .with_detail("questionnaire_id", id.to_string()));
        }

        let questionnaire = Questionnaire::new(
            id,
            cmd.respondent_id,
            ConsentRecord::accepted_at(cmd.started_at),
            cmd.started_at,
        );
        let state = self.engine.start(questionnaire, cmd.respondent_sex);
        self.store.save(&state).await?;

        info!(
            questionnaire_id = %id,
            respondent_sex = %cmd.respondent_sex,
            "Interview started"
        );

        Ok(StartInterviewResult {
            first_question: self.engine.current_question(&state),
            state,
        })
    }
}
