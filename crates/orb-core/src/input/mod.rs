//! Masked user input for the daily reading flow.

pub mod birth_profile;
pub mod mask;

pub use birth_profile::{BirthDate, BirthProfile, BirthTime, MIN_BIRTH_YEAR};
pub use mask::{MaskedField, format_date_input, format_time_input};
