//! Question reference data.
//!
//! Questions are immutable and live in the static catalogue. Only their
//! [`QuestionId`] travels inside engine state.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::Domain;

/// Stable identifier of a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(Cow<'static, str>);

impl QuestionId {
    /// Creates an id from a catalogue constant.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for QuestionId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl PartialEq<str> for QuestionId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for QuestionId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expected answer shape for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Boolean,
    Choice,
    Text,
    Numeric,
    Year,
}

/// Whether a question gates a domain or belongs to its follow-up flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStage {
    /// The single yes/no gate of a domain (the "screening" pseudo-domain).
    Screening,
    /// A follow-up question asked once per case.
    Flow,
}

/// One question as rendered to the respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub domain: Domain,
    pub stage: QuestionStage,
    pub label: &'static str,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl Question {
    fn build(
        id: &'static str,
        domain: Domain,
        stage: QuestionStage,
        label: &'static str,
        kind: QuestionKind,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            id: QuestionId::from_static(id),
            domain,
            stage,
            label,
            kind,
            options,
        }
    }

    /// Creates the screening gate of a domain.
    pub fn screening(id: &'static str, domain: Domain, label: &'static str) -> Self {
        Self::build(id, domain, QuestionStage::Screening, label, QuestionKind::Boolean, &[])
    }

    /// Creates a yes/no flow question.
    pub fn boolean(id: &'static str, domain: Domain, label: &'static str) -> Self {
        Self::build(id, domain, QuestionStage::Flow, label, QuestionKind::Boolean, &[])
    }

    /// Creates a single-choice flow question.
    pub fn choice(
        id: &'static str,
        domain: Domain,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::build(id, domain, QuestionStage::Flow, label, QuestionKind::Choice, options)
    }

    /// Creates a free-text flow question.
    pub fn text(id: &'static str, domain: Domain, label: &'static str) -> Self {
        Self::build(id, domain, QuestionStage::Flow, label, QuestionKind::Text, &[])
    }

    /// Creates a numeric flow question.
    pub fn numeric(id: &'static str, domain: Domain, label: &'static str) -> Self {
        Self::build(id, domain, QuestionStage::Flow, label, QuestionKind::Numeric, &[])
    }

    /// Creates a calendar-year flow question.
    pub fn year(id: &'static str, domain: Domain, label: &'static str) -> Self {
        Self::build(id, domain, QuestionStage::Flow, label, QuestionKind::Year, &[])
    }

    /// Returns true for a domain's screening gate.
    pub fn is_screening(&self) -> bool {
        self.stage == QuestionStage::Screening
    }

    /// Category tag journaled with every answer to this question.
    pub fn tag(&self) -> &'static str {
        match self.stage {
            QuestionStage::Screening => "screening",
            QuestionStage::Flow => self.domain.code(),
        }
    }
}
