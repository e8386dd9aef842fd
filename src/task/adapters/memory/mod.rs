//! In-memory adapters for task ports.

mod publisher;
mod task;

pub use publisher::RecordingTaskEventPublisher;
pub use task::InMemoryTaskRepository;
