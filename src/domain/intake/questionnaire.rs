//! Questionnaire aggregate - the dossier handed to underwriting.
//!
//! Owns the declared cases and the full answer journal. Only the intake
//! engine mutates it, and always on a fresh copy.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CaseId, QuestionnaireId, RespondentId, Timestamp};

use super::catalogue::lifestyle::{CURRENT_SMOKER, SMOKING_STATUS};
use super::{Answer, Case, Domain};

/// Consent given by the respondent before the interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub accepted: bool,
    pub accepted_at: Option<Timestamp>,
}

impl ConsentRecord {
    /// Consent accepted at `at`.
    pub fn accepted_at(at: Timestamp) -> Self {
        Self {
            accepted: true,
            accepted_at: Some(at),
        }
    }

    /// No consent recorded.
    pub fn missing() -> Self {
        Self {
            accepted: false,
            accepted_at: None,
        }
    }
}

/// A risk-sport entry, declared outside the interview flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSportEntry {
    pub sport: String,
    pub frequency: Option<String>,
    pub competition: bool,
}

/// Global flags derived from the cases and answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFlags {
    /// At least one medical (non-lifestyle) case was declared.
    pub has_medical_history: bool,
    /// At least one case is still ongoing.
    pub has_ongoing_condition: bool,
    /// The respondent declared being a current smoker.
    pub current_smoker: bool,
}

/// Aggregate root of one intake interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub id: QuestionnaireId,
    pub respondent_id: RespondentId,
    pub cases: Vec<Case>,
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub risk_sports: Vec<RiskSportEntry>,
    pub summary: SummaryFlags,
    pub consent: ConsentRecord,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Questionnaire {
    /// Creates an empty questionnaire.
    pub fn new(
        id: QuestionnaireId,
        respondent_id: RespondentId,
        consent: ConsentRecord,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            respondent_id,
            cases: Vec::new(),
            answers: Vec::new(),
            risk_sports: Vec::new(),
            summary: SummaryFlags::default(),
            consent,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns a case by id.
    pub fn case(&self, id: CaseId) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Returns the cases declared for a domain, in opening order.
    pub fn cases_for(&self, domain: Domain) -> impl Iterator<Item = &Case> {
        self.cases.iter().filter(move |c| c.domain == domain)
    }

    /// Returns the latest answer to `question_id` linked to `case_id`.
    pub fn latest_answer_for_case(&self, case_id: CaseId, question_id: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .rev()
            .find(|a| a.case_id == Some(case_id) && a.question_id == question_id)
    }

    /// Replaces the stored copy of a case.
    pub(crate) fn replace_case(&mut self, case: Case) {
        if let Some(slot) = self.cases.iter_mut().find(|c| c.id == case.id) {
            *slot = case;
        }
    }

    /// Recomputes the summary flags from the cases and answers.
    pub(crate) fn refresh_summary(&mut self) {
        let current_smoker = self
            .cases_for(Domain::Lifestyle)
            .filter_map(|c| self.latest_answer_for_case(c.id, SMOKING_STATUS))
            .any(|a| a.normalized.as_deref() == Some(CURRENT_SMOKER));

        self.summary = SummaryFlags {
            has_medical_history: self.cases.iter().any(|c| c.domain != Domain::Lifestyle),
            has_ongoing_condition: self.cases.iter().any(Case::is_ongoing),
            current_smoker,
        };
    }
}
