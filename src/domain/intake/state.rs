//! Engine working memory for one interview.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{CaseId, QuestionnaireId, Sex};

use super::{Case, Domain, DomainSequence, QuestionId, Questionnaire};

/// Complete, serializable state of a running or finished interview.
///
/// Replaced wholesale on every transition; hosts persist it between answers
/// keyed by questionnaire id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub questionnaire: Questionnaire,
    pub open_domain: Option<Domain>,
    pub active_case_id: Option<CaseId>,
    /// `None` once the interview is finished.
    pub current_question: Option<QuestionId>,
    /// Screening answers already given, per domain.
    pub screening_answers: BTreeMap<Domain, bool>,
    pub respondent_sex: Sex,
}

impl EngineState {
    pub fn questionnaire_id(&self) -> QuestionnaireId {
        self.questionnaire.id
    }

    /// Returns true once every domain has been screened and closed.
    pub fn is_finished(&self) -> bool {
        self.current_question.is_none()
    }

    /// Domains screened for this respondent, in order.
    pub fn ordered_domains(&self) -> &'static [Domain] {
        DomainSequence::ordered(self.respondent_sex)
    }

    /// Domain screened after `domain` for this respondent.
    pub fn next_domain_after(&self, domain: Domain) -> Option<Domain> {
        DomainSequence::next_after(domain, self.respondent_sex)
    }

    /// The case currently being filled, if any.
    pub fn active_case(&self) -> Option<&Case> {
        self.questionnaire.case(self.active_case_id?)
    }
}
