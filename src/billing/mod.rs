//! Date and sequence arithmetic behind registration and renewal.

pub mod expiry;
pub mod member_code;

pub use expiry::*;
pub use member_code::*;
