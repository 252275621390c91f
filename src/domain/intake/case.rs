//! Declared cases: one reported episode within a domain.
//!
//! A case is opened on an affirmative screening answer or on an affirmative
//! "another case?" answer. It is never deleted and only the engine mutates it,
//! and only while it is the active case.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{CaseId, QuestionnaireId};

use super::{CaseCategory, Domain, QuestionId};

/// Separator between fragments of the readable audit-trail fields.
pub const FRAGMENT_SEPARATOR: &str = " | ";

/// Structured facts extracted from the answers of a case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFacts {
    pub diagnosis: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// `None` until a status question has been answered.
    pub ongoing: Option<bool>,
    pub treatments: Option<String>,
    pub hospitalizations: Option<String>,
    /// Cumulative work stoppage, in days.
    pub work_stoppage_days: Option<u32>,
    /// Residual limitations and status trail.
    pub sequelae: Option<String>,
    /// Treating physician or clinic.
    pub caregiver: Option<String>,
}

/// Appends `fragment` to an audit-trail field, joining with [`FRAGMENT_SEPARATOR`].
pub fn append_fragment(field: &mut Option<String>, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    match field {
        Some(existing) if !existing.is_empty() => {
            existing.push_str(FRAGMENT_SEPARATOR);
            existing.push_str(fragment);
        }
        _ => *field = Some(fragment.to_string()),
    }
}

/// A verbatim answer kept on the case it was given for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseNote {
    pub question_id: QuestionId,
    pub text: String,
}

/// One reported medical or lifestyle episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub questionnaire_id: QuestionnaireId,
    pub domain: Domain,
    pub category: CaseCategory,
    pub title: String,
    pub facts: CaseFacts,
    pub notes: Vec<CaseNote>,
    /// Insurer name to summary; filled downstream, never by the engine.
    #[serde(default)]
    pub insurer_summaries: BTreeMap<String, String>,
}

impl Case {
    /// Opens the `ordinal`-th case of a questionnaire with empty facts.
    pub fn open(questionnaire_id: QuestionnaireId, ordinal: usize, domain: Domain) -> Self {
        Self {
            id: CaseId::derive(questionnaire_id, ordinal),
            questionnaire_id,
            domain,
            category: domain.category(),
            title: domain.display_name().to_string(),
            facts: CaseFacts::default(),
            notes: Vec::new(),
            insurer_summaries: BTreeMap::new(),
        }
    }

    /// Appends a verbatim note.
    pub fn add_note(&mut self, question_id: QuestionId, text: impl Into<String>) {
        self.notes.push(CaseNote {
            question_id,
            text: text.into(),
        });
    }

    /// Returns true if the case is still ongoing.
    pub fn is_ongoing(&self) -> bool {
        self.facts.ongoing == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_case_has_empty_facts_and_mapped_category() {
        let q = QuestionnaireId::new();
        let case = Case::open(q, 0, Domain::Osteo);

        assert_eq!(case.category, CaseCategory::Back);
        assert_eq!(case.facts, CaseFacts::default());
        assert!(case.notes.is_empty());
        assert_eq!(case.questionnaire_id, q);
        assert_eq!(case.id, CaseId::derive(q, 0));
    }

    #[test]
    fn open_case_title_defaults_to_domain_name() {
        let case = Case::open(QuestionnaireId::new(), 0, Domain::Renal);
        assert_eq!(case.title, "Reins et voies urinaires");
        assert_eq!(case.category, CaseCategory::Other);
    }

    #[test]
    fn append_fragment_joins_with_pipe() {
        let mut field = None;
        append_fragment(&mut field, "Opération: Oui");
        append_fragment(&mut field, "Séquelles: Non");
        assert_eq!(field.as_deref(), Some("Opération: Oui | Séquelles: Non"));
    }

    #[test]
    fn append_fragment_ignores_blank_fragments() {
        let mut field = Some("A".to_string());
        append_fragment(&mut field, "  ");
        assert_eq!(field.as_deref(), Some("A"));
    }

    #[test]
    fn is_ongoing_requires_explicit_true() {
        let mut case = Case::open(QuestionnaireId::new(), 0, Domain::Cardio);
        assert!(!case.is_ongoing());
        case.facts.ongoing = Some(true);
        assert!(case.is_ongoing());
    }
}
