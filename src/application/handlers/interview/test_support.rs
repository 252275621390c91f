//! Shared fixtures for interview handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::InMemoryInterviewStore;
use crate::domain::foundation::{QuestionnaireId, RespondentId, Sex, Timestamp};
use crate::domain::intake::{EngineState, IntakeEngine};
use crate::ports::{InterviewStore, InterviewStoreError};

use super::{StartInterviewCommand, StartInterviewHandler};

/// Store whose every operation fails with an IO error.
pub struct FailingInterviewStore;

#[async_trait]
impl InterviewStore for FailingInterviewStore {
    async fn save(&self, _state: &EngineState) -> Result<(), InterviewStoreError> {
        Err(InterviewStoreError::IoError("Simulated save failure".to_string()))
    }

    async fn load(&self, _id: QuestionnaireId) -> Result<EngineState, InterviewStoreError> {
        Err(InterviewStoreError::IoError("Simulated load failure".to_string()))
    }

    async fn exists(&self, _id: QuestionnaireId) -> Result<bool, InterviewStoreError> {
        Ok(false)
    }

    async fn delete(&self, _id: QuestionnaireId) -> Result<(), InterviewStoreError> {
        Ok(())
    }
}

pub fn start_command(sex: Sex) -> StartInterviewCommand {
    StartInterviewCommand {
        questionnaire_id: None,
        respondent_id: RespondentId::new(),
        respondent_sex: sex,
        consent_accepted: true,
        started_at: Timestamp::from_unix_secs(1_700_000_000),
    }
}

/// Starts an interview in a fresh in-memory store.
pub async fn started_interview(sex: Sex) -> (Arc<InMemoryInterviewStore>, EngineState) {
    let store = Arc::new(InMemoryInterviewStore::new());
    let handler = StartInterviewHandler::new(store.clone(), IntakeEngine::new(), Default::default());
    let result = handler.handle(start_command(sex)).await.unwrap();
    (store, result.state)
}
