//! Interview Store Port - Interface for persisting engine state between answers.
//!
//! The intake engine is a pure function of (state, answer). Hosts keep the
//! latest state per questionnaire through this port so an interview can be
//! abandoned and resumed later.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionnaireId};
use crate::domain::intake::EngineState;

/// Errors that can occur during interview store operations
#[derive(Debug, thiserror::Error)]
pub enum InterviewStoreError {
    #[error("Interview not found: {0}")]
    NotFound(QuestionnaireId),

    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<InterviewStoreError> for DomainError {
    fn from(err: InterviewStoreError) -> Self {
        match err {
            InterviewStoreError::NotFound(id) => DomainError::new(
                ErrorCode::QuestionnaireNotFound,
                format!("Questionnaire {} not found", id),
            )
            .with_detail("questionnaire_id", id.to_string()),
            other => DomainError::new(ErrorCode::StorageError, other.to_string()),
        }
    }
}

/// Port for persisting and loading interview state
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Save the latest state of an interview, replacing any previous one
    ///
    /// # Errors
    /// Returns `InterviewStoreError` if save fails
    async fn save(&self, state: &EngineState) -> Result<(), InterviewStoreError>;

    /// Load the latest state of an interview
    ///
    /// # Errors
    /// Returns `InterviewStoreError::NotFound` if no state exists
    async fn load(&self, id: QuestionnaireId) -> Result<EngineState, InterviewStoreError>;

    /// Check if state exists for an interview
    async fn exists(&self, id: QuestionnaireId) -> Result<bool, InterviewStoreError>;

    /// Delete the state of an interview
    async fn delete(&self, id: QuestionnaireId) -> Result<(), InterviewStoreError>;
}
