//! Storage Adapters
//!
//! Implementations of the InterviewStore port.
//!
//! ## Available Adapters
//!
//! - **FileInterviewStore** - Stores each interview as a YAML file on disk
//! - **InMemoryInterviewStore** - Stores state in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileInterviewStore, InMemoryInterviewStore};
//!
//! let store = FileInterviewStore::new("./data/interviews");
//! let store = InMemoryInterviewStore::new();
//! ```

mod file_interview_store;
mod in_memory_interview_store;

pub use file_interview_store::FileInterviewStore;
pub use in_memory_interview_store::InMemoryInterviewStore;
