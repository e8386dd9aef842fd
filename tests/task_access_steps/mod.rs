//! Step definitions for authorised task access scenarios.

pub mod given;
pub mod then;
pub mod when;
