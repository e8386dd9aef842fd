//! Taskdesk: authorisation-aware task management service core.
//!
//! Employees keep a list of tasks. Each task is owned by the employee who
//! created it; managers can read and remove every task, while everyone
//! else works only with their own. Summaries flagged as sensitive are
//! redacted for anyone but the owner, and closed tasks accept no further
//! updates.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, events, etc.)
//!
//! # Modules
//!
//! - [`identity`]: Employee number to user and role resolution
//! - [`task`]: Task visibility, ownership, redaction and lifecycle rules
//! - [`api`]: Request shaping and the response envelope
//! - [`error`]: Error catalog shared across services
//! - [`config`]: Layered runtime settings
//! - [`persistence`]: `PostgreSQL` connection pooling
//! - [`telemetry`]: Structured logging setup

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod persistence;
pub mod task;
pub mod telemetry;
