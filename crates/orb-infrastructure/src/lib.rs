//! Persistence and path plumbing behind the core's repository traits.

pub mod memory_preference_repository;
pub mod paths;
pub mod toml_preference_repository;

pub use memory_preference_repository::MemoryPreferenceRepository;
pub use toml_preference_repository::TomlPreferenceRepository;
