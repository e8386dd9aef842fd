//! In-memory event publisher that records what it was asked to send.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskClosedEvent,
    ports::{TaskEventPublisher, TaskEventPublisherError},
};

/// Thread-safe publisher that keeps every published event.
#[derive(Debug, Clone, Default)]
pub struct RecordingTaskEventPublisher {
    events: Arc<RwLock<Vec<TaskClosedEvent>>>,
}

impl RecordingTaskEventPublisher {
    /// Creates a publisher with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events published so far, oldest first.
    ///
    /// Returns an empty list if the state lock is poisoned.
    #[must_use]
    pub fn published(&self) -> Vec<TaskClosedEvent> {
        self.events
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TaskEventPublisher for RecordingTaskEventPublisher {
    async fn publish_task_closed(
        &self,
        event: &TaskClosedEvent,
    ) -> Result<(), TaskEventPublisherError> {
        let mut events = self.events.write().map_err(|err| {
            TaskEventPublisherError::delivery(std::io::Error::other(err.to_string()))
        })?;
        events.push(event.clone());
        Ok(())
    }
}
