//! # Gym Admin
//!
//! Membership lifecycle and billing engine for a single gym.
//!
//! One [`GymService`](actors::GymService) actor owns the whole [`AppData`](domain::AppData)
//! snapshot. Callers talk to it through a cloneable [`GymClient`](clients::GymClient);
//! [`GymSystem`](app_system::GymSystem) wires the service to a store and a clock and
//! shuts it down.
//!
//! ```ignore
//! let system = GymSystem::new(&GymConfig::from_env())?;
//!
//! let draft = RegistrationDraft::new("Asha Rao", "+919876543210", join_date, "3m", PaymentMode::Upi);
//! let member = system.client.register_member(draft).await?;
//!
//! let links = system.client.renewal_links(member.id.clone()).await?;
//!
//! system.shutdown().await?;
//! ```

pub mod actors;
pub mod app_system;
pub mod billing;
pub mod clients;
pub mod clock;
pub mod domain;
pub mod error;
pub mod format;
pub mod lifecycle;
pub mod messages;
pub mod messaging;
pub mod store;
pub mod view;

#[cfg(test)]
mod mock_framework;
