//! Domain model for task access management.
//!
//! Tasks are owned by the employee who created them. The domain types carry
//! the redaction and lifecycle rules; authorisation decisions that depend
//! on the acting user live in the service layer.

mod code;
mod error;
mod event;
mod patch;
mod task;
mod validation;

pub use code::{MAX_TASK_CODE_LENGTH, TaskCode};
pub use error::TaskDomainError;
pub use event::TaskClosedEvent;
pub use patch::TaskPatch;
pub use task::{MAX_SUMMARY_LENGTH, REDACTION_PLACEHOLDER, Task};
pub use validation::{ValidationReport, validate_new_task, validate_task_patch};
