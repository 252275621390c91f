//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Interview state stores (in-memory, YAML files)

pub mod storage;

pub use storage::{FileInterviewStore, InMemoryInterviewStore};
