//! System orchestration: configuration, startup, and shutdown.

pub mod config;
pub mod gym_system;
pub mod telemetry;

pub use config::*;
pub use gym_system::*;
pub use telemetry::*;
