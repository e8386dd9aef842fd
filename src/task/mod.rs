//! Authorised task access for taskdesk.
//!
//! Employees create, read, update, close and remove tasks. Managers can
//! read and remove every task; everyone else works only with their own.
//! Sensitive summaries are redacted for anyone but the owner, and closed
//! tasks reject further updates. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Access service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
