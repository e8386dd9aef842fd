//! Event publisher that writes notifications to the `tracing` pipeline.
//!
//! Stands in for a message broker: each event becomes a structured log
//! record tagged with its topic, ready for a log shipper to forward.

use async_trait::async_trait;
use tracing::info;

use crate::task::{
    domain::TaskClosedEvent,
    ports::{TaskEventPublisher, TaskEventPublisherError},
};

/// Topic used for task lifecycle notifications.
pub const TASK_OPERATIONS_TOPIC: &str = "task_op";

/// Publishes task events as `tracing` records on a named topic.
#[derive(Debug, Clone)]
pub struct TracingTaskEventPublisher {
    topic: String,
}

impl TracingTaskEventPublisher {
    /// Creates a publisher for `topic`.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }

    /// Returns the topic events are published on.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl Default for TracingTaskEventPublisher {
    fn default() -> Self {
        Self::new(TASK_OPERATIONS_TOPIC)
    }
}

#[async_trait]
impl TaskEventPublisher for TracingTaskEventPublisher {
    async fn publish_task_closed(
        &self,
        event: &TaskClosedEvent,
    ) -> Result<(), TaskEventPublisherError> {
        info!(
            target: "taskdesk::events",
            topic = %self.topic,
            task_code = %event.code(),
            closed_by = %event.closed_by_id(),
            "{}",
            event.message()
        );
        Ok(())
    }
}
