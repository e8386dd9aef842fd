//! API adaptation layer without a transport.
//!
//! Turns raw request inputs (an employee identifier, a path code, a JSON
//! body) into calls on the identity and task services, and turns their
//! results into a status code plus the `{ "error": ..., "data": ... }`
//! envelope. An HTTP framework only has to route requests here and copy the
//! [`ApiReply`] onto the wire.

mod auth;
mod response;
mod tasks;

pub use auth::authenticate;
pub use response::{ApiReply, ApiResponse};
pub use tasks::TaskApi;
