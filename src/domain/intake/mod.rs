//! Intake interview: adaptive medical and lifestyle questionnaire.
//!
//! # Module Organization
//!
//! - `domain_type` - Interview domains and their case categories
//! - `question` / `registry` / `catalogue` - Static question reference data
//! - `traversal` - Order in which domains are screened
//! - `case` / `extraction` - Declared cases and the facts folded into them
//! - `routing` - Next-question choice inside a flow
//! - `questionnaire` / `answer` - The dossier and its answer journal
//! - `state` / `engine` - Working memory and the pure transition function

mod answer;
mod case;
pub(crate) mod catalogue;
mod domain_type;
mod engine;
mod extraction;
mod question;
mod questionnaire;
mod registry;
mod routing;
mod state;
mod traversal;

pub use answer::{normalize, Answer, AnswerValue, RawAnswer, MAX_YEAR_EXCLUSIVE, MIN_YEAR};
pub use case::{append_fragment, Case, CaseFacts, CaseNote, FRAGMENT_SEPARATOR};
pub use domain_type::{CaseCategory, Domain};
pub use engine::{EngineSettings, InterviewProgress, IntakeEngine};
pub use extraction::{
    truncate_title, FactExtractor, FactRule, FactRuleBook, FragmentTarget,
    DEFAULT_TITLE_MAX_CHARS,
};
pub use question::{Question, QuestionId, QuestionKind, QuestionStage};
pub use questionnaire::{ConsentRecord, Questionnaire, RiskSportEntry, SummaryFlags};
pub use registry::{QuestionRegistry, QuestionSlot};
pub use routing::{router_for, FlowRouter, LifestyleRouter, LinearRouter, RouteContext};
pub use state::EngineState;
pub use traversal::DomainSequence;
