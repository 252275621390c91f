//! Fact extraction: folds a raw answer into the active case's structured facts.
//!
//! Each modeled domain contributes a table of `(question id -> FactRule)` in its
//! catalogue module. The tables are merged once into a [`FactRuleBook`] keyed by
//! `(Domain, QuestionId)`, so dispatch is a single map lookup and every domain's
//! rules can be tested on their own.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use super::answer::{format_number, AnswerValue};
use super::case::append_fragment;
use super::catalogue;
use super::{Case, CaseFacts, Domain, Question, QuestionId};

/// Default maximum length of a case title, in characters.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 60;

/// Fact field an audit fragment is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentTarget {
    Diagnosis,
    Treatments,
    Hospitalizations,
    Sequelae,
}

impl FragmentTarget {
    fn field<'a>(&self, facts: &'a mut CaseFacts) -> &'a mut Option<String> {
        match self {
            FragmentTarget::Diagnosis => &mut facts.diagnosis,
            FragmentTarget::Treatments => &mut facts.treatments,
            FragmentTarget::Hospitalizations => &mut facts.hospitalizations,
            FragmentTarget::Sequelae => &mut facts.sequelae,
        }
    }
}

/// Pure update rule applied to a case for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactRule {
    /// Free-text description: seeds the diagnosis and a truncated title.
    Describe,
    /// Appends the answer text as-is (e.g. a type choice onto the diagnosis).
    Append(FragmentTarget),
    /// Sets `start_date` when the year is in `[1900, 2100)`.
    StartYear,
    /// Sets `end_date` when the year is in `[1900, 2100)`.
    EndYear,
    /// Sets `ongoing` (false iff the answer is a resolved phrase) and appends
    /// `"<label>: <answer>"` to the sequelae.
    Status {
        label: &'static str,
        resolved: &'static [&'static str],
    },
    /// Appends `"<label>: Oui/Non"`.
    Flag {
        label: &'static str,
        target: FragmentTarget,
    },
    /// Appends `"<label>: <text>"`.
    Detail {
        label: &'static str,
        target: FragmentTarget,
    },
    /// Appends `"<label>: <number>"` when the answer reads as a number.
    Quantity {
        label: &'static str,
        target: FragmentTarget,
    },
    /// Adds whole days to the cumulative work stoppage.
    WorkStoppage,
    /// Records the treating physician or clinic.
    Caregiver,
}

impl FactRule {
    /// Applies the rule to `case`. Values the rule cannot read are ignored.
    pub fn apply(&self, case: &mut Case, raw: &AnswerValue, title_max_chars: usize) {
        let facts = &mut case.facts;
        match *self {
            FactRule::Describe => {
                if let Some(text) = raw.as_text() {
                    case.title = truncate_title(&text, title_max_chars);
                    append_fragment(&mut facts.diagnosis, &text);
                }
            }
            FactRule::Append(target) => {
                if let Some(text) = raw.as_text() {
                    append_fragment(target.field(facts), &text);
                }
            }
            FactRule::StartYear => {
                match raw.as_year() {
                    Some(year) => facts.start_date = Some(year.to_string()),
                    None => debug!(answer = %raw, "Year out of range, start_date unchanged"),
                }
            }
            FactRule::EndYear => {
                match raw.as_year() {
                    Some(year) => facts.end_date = Some(year.to_string()),
                    None => debug!(answer = %raw, "Year out of range, end_date unchanged"),
                }
            }
            FactRule::Status { label, resolved } => {
                if let Some(text) = raw.as_text() {
                    facts.ongoing = Some(!is_resolved(&text, resolved));
                    append_fragment(&mut facts.sequelae, &format!("{}: {}", label, text));
                }
            }
            FactRule::Flag { label, target } => {
                append_fragment(target.field(facts), &format!("{}: {}", label, raw.yes_no()));
            }
            FactRule::Detail { label, target } => {
                if let Some(text) = raw.as_text() {
                    append_fragment(target.field(facts), &format!("{}: {}", label, text));
                }
            }
            FactRule::Quantity { label, target } => {
                if let Some(n) = raw.as_number() {
                    let fragment = format!("{}: {}", label, format_number(n));
                    append_fragment(target.field(facts), &fragment);
                }
            }
            FactRule::WorkStoppage => {
                if let Some(days) = raw.as_number().filter(|n| *n >= 0.0) {
                    let days = days.round().min(u32::MAX as f64) as u32;
                    let total = facts.work_stoppage_days.unwrap_or(0).saturating_add(days);
                    facts.work_stoppage_days = Some(total);
                }
            }
            FactRule::Caregiver => {
                if let Some(text) = raw.as_text() {
                    append_fragment(&mut facts.caregiver, &text);
                }
            }
        }
    }
}

fn is_resolved(answer: &str, resolved: &[&str]) -> bool {
    let answer = answer.trim().to_lowercase();
    resolved.iter().any(|phrase| phrase.to_lowercase() == answer)
}

/// Truncates to at most `max_chars` characters, on a char boundary.
pub fn truncate_title(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars()
        .take(max_chars)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Registry of every domain's fact rules.
#[derive(Debug)]
pub struct FactRuleBook {
    rules: HashMap<(Domain, QuestionId), FactRule>,
}

static RULE_BOOK: Lazy<FactRuleBook> = Lazy::new(FactRuleBook::build);

impl FactRuleBook {
    fn build() -> Self {
        let mut rules = HashMap::new();
        for entry in catalogue::all() {
            for (question_id, rule) in entry.rules {
                rules.insert((entry.domain, QuestionId::from_static(question_id)), rule);
            }
        }
        Self { rules }
    }

    /// Returns the process-wide rule book.
    pub fn global() -> &'static FactRuleBook {
        &RULE_BOOK
    }

    /// Looks up the rule for a question of a domain.
    pub fn rule_for(&self, domain: Domain, question_id: &QuestionId) -> Option<FactRule> {
        self.rules.get(&(domain, question_id.clone())).copied()
    }

    /// Number of rules for a domain.
    pub fn rule_count(&self, domain: Domain) -> usize {
        self.rules.keys().filter(|(d, _)| *d == domain).count()
    }
}

/// Applies answers to the active case using the global rule book.
#[derive(Debug, Clone, Copy)]
pub struct FactExtractor {
    title_max_chars: usize,
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_MAX_CHARS)
    }
}

impl FactExtractor {
    pub fn new(title_max_chars: usize) -> Self {
        Self { title_max_chars }
    }

    /// Returns an updated copy of `case` with `raw` folded in.
    ///
    /// The raw answer is always appended verbatim to the notes, whether or not
    /// the question has a rule.
    pub fn apply_to_active_case(&self, case: &Case, question: &Question, raw: &AnswerValue) -> Case {
        let mut updated = case.clone();
        if let Some(rule) = FactRuleBook::global().rule_for(question.domain, &question.id) {
            rule.apply(&mut updated, raw, self.title_max_chars);
        }
        updated.add_note(question.id.clone(), raw.to_string());
        updated
    }
}
