//! Membership lifecycle rules.
//!
//! Transitions take the aggregate by `&mut` but validate everything before
//! touching it, so a rejected call leaves the snapshot exactly as it was. The
//! service applies them to a copy and swaps it in only after it is persisted.

pub mod catalog;
pub mod queries;
pub mod registration;
pub mod renewal;
pub mod reports;

pub use catalog::*;
pub use queries::*;
pub use registration::*;
pub use renewal::*;
pub use reports::*;
