//! Cloneable handles for talking to the gym service.

#[macro_use]
mod macros;
mod gym_client;

pub use gym_client::*;
