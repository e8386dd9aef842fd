//! In-memory adapters for identity lookup ports.

mod directory;

pub use directory::InMemoryIdentityRepository;
