//! IntakeEngine - the pure transition function of the interview.
//!
//! The engine never mutates its input. `apply_answer` clones the state,
//! journals the answer, then branches on the region the current question sits
//! in:
//!
//! - **Screening**: yes opens a case and enters the flow, no moves on to the
//!   next domain.
//! - **In-flow**: facts are extracted into the active case and the domain's
//!   router picks the next question.
//! - **Flow-terminal** ("another case?"): yes opens a further case and loops
//!   the flow, no moves on to the next domain.
//!
//! The interview is finished when no domain remains.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::foundation::Sex;

use super::extraction::DEFAULT_TITLE_MAX_CHARS;
use super::routing::{router_for, FlowRouter, LinearRouter, RouteContext};
use super::{
    Answer, Case, Domain, EngineState, FactExtractor, Question, QuestionRegistry, QuestionSlot,
    Questionnaire, RawAnswer,
};

/// Tunables of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Maximum length of a case title derived from a description answer.
    pub title_max_chars: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// Snapshot of how far an interview has progressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewProgress {
    pub open_domain: Option<Domain>,
    /// 1-based position of the open domain in the respondent's sequence.
    pub domain_position: Option<usize>,
    pub domain_total: usize,
    pub cases_declared: usize,
    pub answers_given: usize,
    pub finished: bool,
}

/// Adaptive intake interview engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeEngine {
    extractor: FactExtractor,
}

impl IntakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            extractor: FactExtractor::new(settings.title_max_chars),
        }
    }

    /// Creates the initial state: the first modeled domain's screening question.
    pub fn start(&self, questionnaire: Questionnaire, respondent_sex: Sex) -> EngineState {
        let mut state = EngineState {
            questionnaire,
            open_domain: None,
            active_case_id: None,
            current_question: None,
            screening_answers: Default::default(),
            respondent_sex,
        };
        let first = first_screened_domain(&state);
        enter_screening(&mut state, first);
        state
    }

    /// Returns the question to ask next, or `None` once the interview is finished.
    ///
    /// Also `None` for a state whose current id is not in the registry; such a
    /// state is not finished and [`apply_answer`](Self::apply_answer) ignores
    /// answers to it.
    pub fn current_question(&self, state: &EngineState) -> Option<&'static Question> {
        let id = state.current_question.as_ref()?;
        let question = QuestionRegistry::global().question(id);
        if question.is_none() {
            warn!(
                questionnaire_id = %state.questionnaire.id,
                question_id = %id,
                "Current question id is not in the registry"
            );
        }
        question
    }

    /// Applies one answer to the current question and returns the next state.
    ///
    /// Answering a finished interview is a no-op and returns an equal state.
    pub fn apply_answer(&self, state: &EngineState, raw: RawAnswer) -> EngineState {
        let Some(current_id) = state.current_question.as_ref() else {
            warn!(
                questionnaire_id = %state.questionnaire.id,
                "Answer submitted to a finished interview, ignoring"
            );
            return state.clone();
        };

        let registry = QuestionRegistry::global();
        let (Some(question), Some((domain, slot))) =
            (registry.question(current_id), registry.locate(current_id))
        else {
            warn!(
                questionnaire_id = %state.questionnaire.id,
                question_id = %current_id,
                "Current question id is not in the registry, ignoring answer"
            );
            return state.clone();
        };

        let mut next = state.clone();
        let linked_case = match slot {
            QuestionSlot::Screening => None,
            QuestionSlot::Flow(_) => next.active_case_id,
        };
        let sequence = next.questionnaire.answers.len();
        next.questionnaire.answers.push(Answer::record(
            next.questionnaire.id,
            sequence,
            question,
            &raw,
            linked_case,
        ));
        next.questionnaire.updated_at = raw.answered_at;

        let yes = raw.value.is_affirmative();
        match slot {
            QuestionSlot::Screening => {
                next.screening_answers.insert(domain, yes);
                if yes {
                    open_case(&mut next, domain);
                } else {
                    advance_past(&mut next, domain);
                }
            }
            QuestionSlot::Flow(_) => {
                self.extract(&mut next, question, &raw);
                if registry.is_flow_terminal(&question.id) {
                    if yes {
                        open_case(&mut next, domain);
                    } else {
                        advance_past(&mut next, domain);
                    }
                } else {
                    route_within_flow(&mut next, question, &raw, domain);
                }
            }
        }

        next.questionnaire.refresh_summary();
        next
    }

    /// Reports how far the interview has progressed.
    pub fn progress(&self, state: &EngineState) -> InterviewProgress {
        let ordered = state.ordered_domains();
        InterviewProgress {
            open_domain: state.open_domain,
            domain_position: state
                .open_domain
                .and_then(|d| ordered.iter().position(|&o| o == d))
                .map(|p| p + 1),
            domain_total: ordered.len(),
            cases_declared: state.questionnaire.cases.len(),
            answers_given: state.questionnaire.answers.len(),
            finished: state.is_finished(),
        }
    }

    fn extract(&self, state: &mut EngineState, question: &Question, raw: &RawAnswer) {
        let Some(case) = state.active_case() else {
            warn!(
                questionnaire_id = %state.questionnaire.id,
                question_id = %question.id,
                "Flow answer without an active case, facts not extracted"
            );
            return;
        };
        let updated = self
            .extractor
            .apply_to_active_case(case, question, &raw.value);
        state.questionnaire.replace_case(updated);
    }
}

/// First domain of the respondent's sequence that has a screening question.
fn first_screened_domain(state: &EngineState) -> Option<Domain> {
    state
        .ordered_domains()
        .iter()
        .copied()
        .find(|&d| is_screened(d))
}

/// Next domain after `domain` that has a screening question.
fn next_screened_domain(state: &EngineState, domain: Domain) -> Option<Domain> {
    let mut cursor = state.next_domain_after(domain);
    while let Some(candidate) = cursor {
        if is_screened(candidate) {
            return Some(candidate);
        }
        debug!(domain = %candidate.code(), "Skipping unmodeled domain");
        cursor = state.next_domain_after(candidate);
    }
    None
}

fn is_screened(domain: Domain) -> bool {
    QuestionRegistry::global()
        .screening_question_for(domain)
        .is_some()
}

fn enter_screening(state: &mut EngineState, domain: Option<Domain>) {
    state.active_case_id = None;
    let screening = domain.and_then(|d| QuestionRegistry::global().screening_question_for(d));
    match (domain, screening) {
        (Some(domain), Some(question)) => {
            debug!(
                questionnaire_id = %state.questionnaire.id,
                domain = %domain.code(),
                "Entering domain"
            );
            state.open_domain = Some(domain);
            state.current_question = Some(question.id.clone());
        }
        _ => {
            state.open_domain = None;
            state.current_question = None;
            info!(
                questionnaire_id = %state.questionnaire.id,
                cases = state.questionnaire.cases.len(),
                answers = state.questionnaire.answers.len(),
                "Interview completed"
            );
        }
    }
}

fn advance_past(state: &mut EngineState, domain: Domain) {
    let next = next_screened_domain(state, domain);
    enter_screening(state, next);
}

fn open_case(state: &mut EngineState, domain: Domain) {
    let ordinal = state.questionnaire.cases.len();
    let case = Case::open(state.questionnaire.id, ordinal, domain);
    debug!(
        questionnaire_id = %state.questionnaire.id,
        case_id = %case.id,
        domain = %domain.code(),
        "Case opened"
    );
    state.active_case_id = Some(case.id);
    state.open_domain = Some(domain);
    state.questionnaire.cases.push(case);

    match QuestionRegistry::global().first_question_of(domain) {
        Some(first) => state.current_question = Some(first.id.clone()),
        None => advance_past(state, domain),
    }
}

fn route_within_flow(state: &mut EngineState, question: &Question, raw: &RawAnswer, domain: Domain) {
    let ctx = RouteContext {
        question,
        answer: &raw.value,
        questionnaire: &state.questionnaire,
        active_case_id: state.active_case_id,
    };
    let next = router_for(domain)
        .next_question(&ctx)
        .or_else(|| LinearRouter.next_question(&ctx));

    match next {
        Some(id) => state.current_question = Some(id),
        None => advance_past(state, domain),
    }
}
