//! Outbound text and deep links: UPI payment URIs and renewal reminders.
//!
//! Everything here is pure string building. Opening the links is the
//! presentation layer's job.

pub mod renewal;
pub mod upi;

pub use renewal::*;
pub use upi::*;
