//! Flow routing: picks the next question inside a domain's flow.
//!
//! Most domains advance linearly. Lifestyle skips parts of its flow depending
//! on earlier answers, so it gets its own router. A router may defer, in which
//! case the engine falls back to linear advancement.

use crate::domain::foundation::CaseId;

use super::catalogue::lifestyle::{
    ALCOHOL_UNITS, ANOTHER_CASE, CURRENT_SMOKER, NEVER_SMOKED, OTHER_SUBSTANCES,
    SMOKING_SINCE_YEAR, SMOKING_STATUS, WEIGHT_CHANGE,
};
use super::{AnswerValue, Domain, Question, QuestionId, QuestionRegistry, QuestionSlot, Questionnaire};

/// Everything a router may look at when choosing the next question.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    /// The flow question just answered.
    pub question: &'a Question,
    pub answer: &'a AnswerValue,
    /// Questionnaire with the current answer already journaled.
    pub questionnaire: &'a Questionnaire,
    pub active_case_id: Option<CaseId>,
}

/// Chooses the next flow question after an in-flow answer.
pub trait FlowRouter: Send + Sync {
    /// Returns the next question id, or `None` to defer to linear advancement.
    fn next_question(&self, ctx: &RouteContext<'_>) -> Option<QuestionId>;
}

/// Advances to the next question by flow position.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRouter;

impl FlowRouter for LinearRouter {
    fn next_question(&self, ctx: &RouteContext<'_>) -> Option<QuestionId> {
        let registry = QuestionRegistry::global();
        match registry.locate(&ctx.question.id)? {
            (domain, QuestionSlot::Flow(position)) => registry
                .flow_for(domain)
                .get(position + 1)
                .map(|q| q.id.clone()),
            (_, QuestionSlot::Screening) => None,
        }
    }
}

/// Answer-dependent routing for the lifestyle flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifestyleRouter;

impl LifestyleRouter {
    fn smoking_status_of<'a>(ctx: &RouteContext<'a>) -> Option<&'a str> {
        let case_id = ctx.active_case_id?;
        ctx.questionnaire
            .latest_answer_for_case(case_id, SMOKING_STATUS)
            .and_then(|a| a.normalized.as_deref())
    }
}

fn matches_option(answer: &AnswerValue, option: &str) -> bool {
    match answer {
        AnswerValue::Text(text) => text.trim().eq_ignore_ascii_case(option),
        _ => false,
    }
}

impl FlowRouter for LifestyleRouter {
    fn next_question(&self, ctx: &RouteContext<'_>) -> Option<QuestionId> {
        let next = match ctx.question.id.as_str() {
            SMOKING_STATUS if matches_option(ctx.answer, NEVER_SMOKED) => OTHER_SUBSTANCES,
            SMOKING_SINCE_YEAR
                if Self::smoking_status_of(ctx)
                    .is_some_and(|status| status.eq_ignore_ascii_case(CURRENT_SMOKER)) =>
            {
                OTHER_SUBSTANCES
            }
            OTHER_SUBSTANCES if !ctx.answer.is_affirmative() => ALCOHOL_UNITS,
            WEIGHT_CHANGE if !ctx.answer.is_affirmative() => ANOTHER_CASE,
            _ => return None,
        };
        Some(QuestionId::from_static(next))
    }
}

static LINEAR: LinearRouter = LinearRouter;
static LIFESTYLE: LifestyleRouter = LifestyleRouter;

/// Returns the router used for a domain's flow.
pub fn router_for(domain: Domain) -> &'static dyn FlowRouter {
    match domain {
        Domain::Lifestyle => &LIFESTYLE,
        _ => &LINEAR,
    }
}
