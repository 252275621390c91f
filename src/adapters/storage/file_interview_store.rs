//! File-based Interview Store Adapter
//!
//! Stores each interview's engine state as a YAML file named after its
//! questionnaire id, so a running interview can be inspected and resumed.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::QuestionnaireId;
use crate::domain::intake::EngineState;
use crate::ports::{InterviewStore, InterviewStoreError};

/// File-based storage for interview state
#[derive(Debug, Clone)]
pub struct FileInterviewStore {
    base_path: PathBuf,
}

impl FileInterviewStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileInterviewStore::new("./data/interviews");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the state file path for an interview
    fn state_file_path(&self, id: QuestionnaireId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }

    async fn ensure_base_dir(&self) -> Result<(), InterviewStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| InterviewStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl InterviewStore for FileInterviewStore {
    async fn save(&self, state: &EngineState) -> Result<(), InterviewStoreError> {
        self.ensure_base_dir().await?;

        let yaml = serde_yaml::to_string(state)
            .map_err(|e| InterviewStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.state_file_path(state.questionnaire_id()), yaml)
            .await
            .map_err(|e| InterviewStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, id: QuestionnaireId) -> Result<EngineState, InterviewStoreError> {
        let file_path = self.state_file_path(id);

        if !file_path.exists() {
            return Err(InterviewStoreError::NotFound(id));
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| InterviewStoreError::IoError(e.to_string()))?;

        serde_yaml::from_str(&yaml)
            .map_err(|e| InterviewStoreError::DeserializationFailed(e.to_string()))
    }

    async fn exists(&self, id: QuestionnaireId) -> Result<bool, InterviewStoreError> {
        Ok(self.state_file_path(id).exists())
    }

    async fn delete(&self, id: QuestionnaireId) -> Result<(), InterviewStoreError> {
        let file_path = self.state_file_path(id);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| InterviewStoreError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RespondentId, Sex, Timestamp};
    use crate::domain::intake::{ConsentRecord, IntakeEngine, Questionnaire, RawAnswer};
    use tempfile::TempDir;

    fn test_state() -> EngineState {
        let questionnaire = Questionnaire::new(
            QuestionnaireId::new(),
            RespondentId::new(),
            ConsentRecord::accepted_at(Timestamp::from_unix_secs(1_700_000_000)),
            Timestamp::from_unix_secs(1_700_000_000),
        );
        IntakeEngine::new().start(questionnaire, Sex::Male)
    }

    #[tokio::test]
    async fn test_file_store_save_and_load_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileInterviewStore::new(temp_dir.path());

        let engine = IntakeEngine::new();
        let state = test_state();
        let at = Timestamp::from_unix_secs(1_700_000_100);
        let state = engine.apply_answer(&state, RawAnswer::at(true, at));
        let state = engine.apply_answer(&state, RawAnswer::at("Entorse cheville", at));

        store.save(&state).await.unwrap();
        let loaded = store.load(state.questionnaire_id()).await.unwrap();

        assert_eq!(loaded.current_question, state.current_question);
        assert_eq!(loaded.active_case_id, state.active_case_id);
        assert_eq!(loaded.questionnaire.cases, state.questionnaire.cases);
        assert_eq!(loaded.questionnaire.answers.len(), 2);
    }

    #[tokio::test]
    async fn test_file_store_load_nonexistent_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileInterviewStore::new(temp_dir.path());

        let result = store.load(QuestionnaireId::new()).await;

        assert!(matches!(result, Err(InterviewStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_store_exists_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileInterviewStore::new(temp_dir.path().join("nested"));
        let state = test_state();
        let id = state.questionnaire_id();

        assert!(!store.exists(id).await.unwrap());
        store.save(&state).await.unwrap();
        assert!(store.exists(id).await.unwrap());

        store.delete(id).await.unwrap();
        assert!(!store.exists(id).await.unwrap());
        store.delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_is_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileInterviewStore::new(temp_dir.path());
        let id = QuestionnaireId::new();

        std::fs::write(temp_dir.path().join(format!("{}.yaml", id)), "not: [valid").unwrap();
        let result = store.load(id).await;

        assert!(matches!(result, Err(InterviewStoreError::DeserializationFailed(_))));
    }
}
