//! GetFinishedQuestionnaireHandler - Query handler for the completed dossier.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionnaireId};
use crate::domain::intake::Questionnaire;
use crate::ports::InterviewStore;

/// Query for the questionnaire of a finished interview.
#[derive(Debug, Clone, Copy)]
pub struct GetFinishedQuestionnaireQuery {
    pub questionnaire_id: QuestionnaireId,
}

/// Handler returning the questionnaire once no question remains.
pub struct GetFinishedQuestionnaireHandler {
    store: Arc<dyn InterviewStore>,
}

impl GetFinishedQuestionnaireHandler {
    pub fn new(store: Arc<dyn InterviewStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetFinishedQuestionnaireQuery) -> Result<Questionnaire, DomainError> {
        let state = self.store.load(query.questionnaire_id).await?;
        if !state.is_finished() {
            return Err(DomainError::new(
                ErrorCode::InterviewNotFinished,
                format!("Interview {} still has questions to answer", query.questionnaire_id),
            )
            .with_detail("questionnaire_id", query.questionnaire_id.to_string()));
        }
        Ok(state.questionnaire)
    }
}
