//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod interview;

pub use interview::{
    CurrentQuestionView, GetCurrentQuestionHandler, GetCurrentQuestionQuery,
    GetFinishedQuestionnaireHandler, GetFinishedQuestionnaireQuery, InterviewLocks,
    StartInterviewCommand, StartInterviewHandler, StartInterviewResult, SubmitAnswerCommand,
    SubmitAnswerHandler, SubmitAnswerResult,
};
