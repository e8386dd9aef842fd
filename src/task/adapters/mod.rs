//! Adapter implementations for task ports.

pub mod logging;
pub mod memory;
pub mod postgres;
