use thiserror::Error;

/// Errors surfaced by the membership core.
///
/// Every variant leaves the owned snapshot untouched: a rejected request never
/// writes partial state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GymError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Plan not found: {0}")]
    PlanNotFound(String),
    #[error("Member not found: {0}")]
    MemberNotFound(String),
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),
    #[error("Deletion not confirmed for member: {0}")]
    DeletionNotConfirmed(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl GymError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type GymResult<T> = std::result::Result<T, GymError>;
