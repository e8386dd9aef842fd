//! Unit tests for the task module.
//!
//! Covers the domain record and its redaction rules, request validation,
//! the in-memory adapters, and the access service's authorisation and
//! lifecycle behaviour against both in-memory and mocked ports.
