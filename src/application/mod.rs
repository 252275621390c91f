//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates the intake engine and the interview store.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod interview_service;

pub use handlers::{
    CurrentQuestionView, GetCurrentQuestionHandler, GetCurrentQuestionQuery,
    GetFinishedQuestionnaireHandler, GetFinishedQuestionnaireQuery, InterviewLocks,
    StartInterviewCommand, StartInterviewHandler, StartInterviewResult, SubmitAnswerCommand,
    SubmitAnswerHandler, SubmitAnswerResult,
};
pub use interview_service::InterviewService;
