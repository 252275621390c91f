//! Per-questionnaire write locks.
//!
//! The engine does not guard against two answers applied to the same stale
//! state. Handlers that write a questionnaire take its lock first.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::QuestionnaireId;

/// Registry of one async mutex per questionnaire.
#[derive(Debug, Clone, Default)]
pub struct InterviewLocks {
    locks: Arc<Mutex<HashMap<QuestionnaireId, Arc<Mutex<()>>>>>,
}

impl InterviewLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a questionnaire.
    pub async fn acquire(&self, id: QuestionnaireId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(id).or_default())
        };
        lock.lock_owned().await
    }

    /// Drops the lock of a questionnaire once nobody holds or awaits it.
    ///
    /// Call after the guard returned by [`acquire`](Self::acquire) is dropped.
    /// A lock still referenced by a guard or a waiter stays registered.
    pub async fn release(&self, id: QuestionnaireId) {
        let mut locks = self.locks.lock().await;
        if locks.get(&id).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(&id);
        }
    }

    /// Number of questionnaires with a registered lock.
    pub async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }
}
