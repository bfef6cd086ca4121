use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a payment was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMode::Cash => write!(f, "Cash"),
            PaymentMode::Upi => write!(f, "UPI"),
        }
    }
}

/// Money collected against a plan. Never edited or removed once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: u64,
    pub plan_id: String,
    pub mode: PaymentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_sent: Option<bool>,
}

impl Payment {
    pub fn new(
        date: DateTime<Utc>,
        amount: u64,
        plan_id: impl Into<String>,
        mode: PaymentMode,
    ) -> Self {
        Self {
            id: format!("pay_{}", uuid::Uuid::new_v4().simple()),
            date,
            amount,
            plan_id: plan_id.into(),
            mode,
            receipt_sent: None,
        }
    }
}
