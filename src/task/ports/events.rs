//! Outbound notification port for task lifecycle events.

use crate::task::domain::TaskClosedEvent;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Publishes task lifecycle events after their change has been persisted.
///
/// Delivery is best effort: callers log failures and carry on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskEventPublisher: Send + Sync {
    /// Publishes a closed-task notification.
    async fn publish_task_closed(
        &self,
        event: &TaskClosedEvent,
    ) -> Result<(), TaskEventPublisherError>;
}

/// Errors returned by event publisher implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskEventPublisherError {
    /// The notification could not be delivered.
    #[error("event delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskEventPublisherError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
