//! Application services for authorised task access.

mod access;

pub use access::{TaskAccessError, TaskAccessResult, TaskAccessService};
