//! The single actor that owns the membership snapshot.

mod gym_service;

pub use gym_service::*;
