//! Application services for identity resolution.

mod resolution;

pub use resolution::{IdentityError, IdentityResolutionService, IdentityResult};
