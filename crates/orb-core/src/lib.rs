//! Core domain of the ORB oracle: motion filters, the interaction state
//! machine, input validation and the collaborator seams (resolver, voice,
//! haptics, preferences).
//!
//! The visual layer, platform permissions and the concrete speech engine are
//! external collaborators; this crate only defines the contracts they plug
//! into.

pub mod error;
pub mod history;
pub mod input;
pub mod motion;
pub mod preferences;
pub mod resolver;
pub mod session;

// Re-export common error type
pub use error::{OrbError, Result};
