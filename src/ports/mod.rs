//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `InterviewStore` - Persistence of engine state keyed by questionnaire id

mod interview_store;

pub use interview_store::{InterviewStore, InterviewStoreError};
