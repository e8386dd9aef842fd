//! Employee identity resolution for taskdesk.
//!
//! Inbound requests carry an employee number. This module resolves it into a
//! [`domain::User`] with its [`domain::UserRole`] attached, which is the
//! acting user every task operation is authorised against. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
