//! In-Memory Interview Store Adapter
//!
//! Keeps the latest engine state per questionnaire in memory.
//! Useful for testing and for the terminal interview.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::QuestionnaireId;
use crate::domain::intake::EngineState;
use crate::ports::{InterviewStore, InterviewStoreError};

/// In-memory storage for interview state
#[derive(Debug, Clone)]
pub struct InMemoryInterviewStore {
    states: Arc<RwLock<HashMap<QuestionnaireId, EngineState>>>,
}

impl InMemoryInterviewStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            states: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.states.write().await.clear();
    }

    /// Get the number of stored interviews
    pub async fn interview_count(&self) -> usize {
        self.states.read().await.len()
    }
}

impl Default for InMemoryInterviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterviewStore for InMemoryInterviewStore {
    async fn save(&self, state: &EngineState) -> Result<(), InterviewStoreError> {
        let mut states = self.states.write().await;
        states.insert(state.questionnaire_id(), state.clone());
        Ok(())
    }

    async fn load(&self, id: QuestionnaireId) -> Result<EngineState, InterviewStoreError> {
        let states = self.states.read().await;
        states
            .get(&id)
            .cloned()
            .ok_or(InterviewStoreError::NotFound(id))
    }

    async fn exists(&self, id: QuestionnaireId) -> Result<bool, InterviewStoreError> {
        let states = self.states.read().await;
        Ok(states.contains_key(&id))
    }

    async fn delete(&self, id: QuestionnaireId) -> Result<(), InterviewStoreError> {
        self.states.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RespondentId, Sex, Timestamp};
    use crate::domain::intake::{ConsentRecord, IntakeEngine, Questionnaire, RawAnswer};

    fn test_state() -> EngineState {
        let questionnaire = Questionnaire::new(
            QuestionnaireId::new(),
            RespondentId::new(),
            ConsentRecord::accepted_at(Timestamp::now()),
            Timestamp::now(),
        );
        IntakeEngine::new().start(questionnaire, Sex::Female)
    }

    #[tokio::test]
    async fn test_save_and_load_state() {
        let store = InMemoryInterviewStore::new();
        let state = test_state();

        store.save(&state).await.unwrap();
        let loaded = store.load(state.questionnaire_id()).await.unwrap();

        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_load_nonexistent_state() {
        let store = InMemoryInterviewStore::new();
        let result = store.load(QuestionnaireId::new()).await;

        assert!(matches!(result, Err(InterviewStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_state() {
        let store = InMemoryInterviewStore::new();
        let state = test_state();
        store.save(&state).await.unwrap();

        let next = IntakeEngine::new().apply_answer(&state, RawAnswer::new(false));
        store.save(&next).await.unwrap();

        let loaded = store.load(state.questionnaire_id()).await.unwrap();
        assert_eq!(loaded.questionnaire.answers.len(), 1);
        assert_eq!(store.interview_count().await, 1);
    }

    #[tokio::test]
    async fn test_exists_and_delete() {
        let store = InMemoryInterviewStore::new();
        let state = test_state();
        let id = state.questionnaire_id();

        assert!(!store.exists(id).await.unwrap());
        store.save(&state).await.unwrap();
        assert!(store.exists(id).await.unwrap());

        store.delete(id).await.unwrap();
        assert!(!store.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryInterviewStore::new();
        store.save(&test_state()).await.unwrap();
        store.save(&test_state()).await.unwrap();
        assert_eq!(store.interview_count().await, 2);

        store.clear().await;
        assert_eq!(store.interview_count().await, 0);
    }
}
