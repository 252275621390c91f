//! Answer values and the append-only answer journal entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AnswerId, CaseId, QuestionnaireId, Timestamp};

use super::{Question, QuestionId, QuestionKind};

/// Inclusive lower bound of an accepted calendar year.
pub const MIN_YEAR: i32 = 1900;

/// Exclusive upper bound of an accepted calendar year.
pub const MAX_YEAR_EXCLUSIVE: i32 = 2100;

/// Raw value given by the respondent, in whatever shape the host collected it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Returns true only for the "yes" sentinels: `true`, `"true"`, `"Oui"`.
    ///
    /// Text must match exactly. Everything else, including malformed values
    /// and other spellings, counts as "no".
    pub fn is_affirmative(&self) -> bool {
        match self {
            AnswerValue::Bool(b) => *b,
            AnswerValue::Text(s) => s == "true" || s == "Oui",
            AnswerValue::Number(_) => false,
        }
    }

    /// French yes/no rendering used in audit fragments.
    pub fn yes_no(&self) -> &'static str {
        if self.is_affirmative() {
            "Oui"
        } else {
            "Non"
        }
    }

    /// Parses a number from a numeric value or from text (comma decimals accepted).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) if n.is_finite() => Some(*n),
            AnswerValue::Text(s) => s
                .trim()
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Returns the year if the value is a whole number in `[1900, 2100)`.
    pub fn as_year(&self) -> Option<i32> {
        let n = self.as_number()?;
        if n.fract() != 0.0 {
            return None;
        }
        let year = n as i64;
        if (MIN_YEAR as i64..MAX_YEAR_EXCLUSIVE as i64).contains(&year) {
            Some(year as i32)
        } else {
            None
        }
    }

    /// Returns trimmed non-empty text, rendering numbers and booleans as strings.
    pub fn as_text(&self) -> Option<String> {
        let text = self.to_string();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(b) => write!(f, "{}", b),
            AnswerValue::Number(n) => write!(f, "{}", format_number(*n)),
            AnswerValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(value as f64)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// Renders whole numbers without a trailing `.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// An answer as submitted to the engine, stamped by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnswer {
    pub value: AnswerValue,
    pub answered_at: Timestamp,
}

impl RawAnswer {
    /// Creates an answer stamped with the current time.
    pub fn new(value: impl Into<AnswerValue>) -> Self {
        Self::at(value, Timestamp::now())
    }

    /// Creates an answer stamped with an explicit time.
    pub fn at(value: impl Into<AnswerValue>, answered_at: Timestamp) -> Self {
        Self {
            value: value.into(),
            answered_at,
        }
    }
}

/// Immutable journal entry recording one answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    /// Position in the journal, starting at 0.
    pub sequence: usize,
    pub question_id: QuestionId,
    /// Label shown at answer time.
    pub label: String,
    /// `"screening"` or the domain code.
    pub category: String,
    pub raw: AnswerValue,
    pub normalized: Option<String>,
    pub case_id: Option<CaseId>,
    pub answered_at: Timestamp,
}

impl Answer {
    /// Records `raw` as the `sequence`-th answer of a questionnaire.
    pub fn record(
        questionnaire_id: QuestionnaireId,
        sequence: usize,
        question: &Question,
        raw: &RawAnswer,
        case_id: Option<CaseId>,
    ) -> Self {
        Self {
            id: AnswerId::derive(questionnaire_id, sequence),
            sequence,
            question_id: question.id.clone(),
            label: question.label.to_string(),
            category: question.tag().to_string(),
            raw: raw.value.clone(),
            normalized: normalize(question.kind, &raw.value),
            case_id,
            answered_at: raw.answered_at,
        }
    }
}

/// Normalizes a raw value according to the question's expected shape.
///
/// Returns `None` when the value cannot be read in that shape.
pub fn normalize(kind: QuestionKind, value: &AnswerValue) -> Option<String> {
    match kind {
        QuestionKind::Boolean => Some(value.yes_no().to_string()),
        QuestionKind::Year => value.as_year().map(|y| y.to_string()),
        QuestionKind::Numeric => value.as_number().map(format_number),
        QuestionKind::Choice | QuestionKind::Text => value.as_text(),
    }
}
