//! Question registry: pure lookups over the static catalogue.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::catalogue;
use super::{Domain, Question, QuestionId};

/// Where a question sits within its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSlot {
    Screening,
    /// Position within the domain's flow.
    Flow(usize),
}

/// Static catalogue of screening questions and follow-up flows.
#[derive(Debug)]
pub struct QuestionRegistry {
    screening: HashMap<Domain, Question>,
    flows: HashMap<Domain, Vec<Question>>,
    index: HashMap<QuestionId, (Domain, QuestionSlot)>,
}

static REGISTRY: Lazy<QuestionRegistry> = Lazy::new(QuestionRegistry::build);

impl QuestionRegistry {
    fn build() -> Self {
        let mut screening = HashMap::new();
        let mut flows = HashMap::new();
        let mut index = HashMap::new();

        for entry in catalogue::all() {
            index.insert(entry.screening.id.clone(), (entry.domain, QuestionSlot::Screening));
            for (position, question) in entry.flow.iter().enumerate() {
                index.insert(question.id.clone(), (entry.domain, QuestionSlot::Flow(position)));
            }
            screening.insert(entry.domain, entry.screening);
            flows.insert(entry.domain, entry.flow);
        }

        Self {
            screening,
            flows,
            index,
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static QuestionRegistry {
        &REGISTRY
    }

    /// Returns the screening gate of a domain, if the domain is modeled.
    pub fn screening_question_for(&self, domain: Domain) -> Option<&Question> {
        self.screening.get(&domain)
    }

    /// Returns the ordered follow-up flow of a domain; empty when unmodeled.
    pub fn flow_for(&self, domain: Domain) -> &[Question] {
        self.flows.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the first follow-up question of a domain.
    pub fn first_question_of(&self, domain: Domain) -> Option<&Question> {
        self.flow_for(domain).first()
    }

    /// Looks up any question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        let (domain, slot) = self.locate(id)?;
        match slot {
            QuestionSlot::Screening => self.screening_question_for(domain),
            QuestionSlot::Flow(position) => self.flow_for(domain).get(position),
        }
    }

    /// Returns the domain and slot of a question.
    pub fn locate(&self, id: &QuestionId) -> Option<(Domain, QuestionSlot)> {
        self.index.get(id).copied()
    }

    /// Returns true if `id` is the last question of its domain's flow.
    pub fn is_flow_terminal(&self, id: &QuestionId) -> bool {
        match self.locate(id) {
            Some((domain, QuestionSlot::Flow(position))) => {
                position + 1 == self.flow_for(domain).len()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static QuestionRegistry {
        QuestionRegistry::global()
    }

    #[test]
    fn screening_question_is_returned_for_modeled_domain() {
        let q = registry().screening_question_for(Domain::Osteo).unwrap();
        assert_eq!(q.id, "screen_osteo");
        assert!(q.is_screening());
    }

    #[test]
    fn unmodeled_domain_has_empty_flow_and_no_screening() {
        assert!(registry().flow_for(Domain::SportsRisk).is_empty());
        assert!(registry().first_question_of(Domain::SportsRisk).is_none());
        assert!(registry().screening_question_for(Domain::SportsRisk).is_none());
    }

    #[test]
    fn first_question_of_osteo_is_description() {
        let q = registry().first_question_of(Domain::Osteo).unwrap();
        assert_eq!(q.id, "osteo_description");
    }

    #[test]
    fn lookup_by_id_finds_flow_and_screening_questions() {
        let flow = registry()
            .question(&QuestionId::from_static("cardio_status"))
            .unwrap();
        assert_eq!(flow.domain, Domain::Cardio);

        let gate = registry()
            .question(&QuestionId::from_static("screen_psy"))
            .unwrap();
        assert_eq!(gate.domain, Domain::Psy);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let id = QuestionId::from_static("does_not_exist");
        assert!(registry().question(&id).is_none());
        assert!(registry().locate(&id).is_none());
        assert!(!registry().is_flow_terminal(&id));
    }

    #[test]
    fn locate_reports_flow_position() {
        let (domain, slot) = registry()
            .locate(&QuestionId::from_static("osteo_type"))
            .unwrap();
        assert_eq!(domain, Domain::Osteo);
        assert_eq!(slot, QuestionSlot::Flow(1));
    }

    #[test]
    fn another_case_questions_are_flow_terminal() {
        assert!(registry().is_flow_terminal(&QuestionId::from_static("osteo_another_case")));
        assert!(registry().is_flow_terminal(&QuestionId::from_static("lifestyle_another_case")));
        assert!(!registry().is_flow_terminal(&QuestionId::from_static("osteo_status")));
        assert!(!registry().is_flow_terminal(&QuestionId::from_static("screen_osteo")));
    }
}
