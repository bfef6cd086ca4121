use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Payment;

/// Observable membership state, derived from the stored expiry and "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipStatus {
    Active,
    Expired,
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipStatus::Active => write!(f, "Active"),
            MembershipStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// A registered gym customer.
///
/// `payments` is append-only and in chronological order; the registration
/// payment is always first. `membership_expiry` is stored redundantly and is
/// kept in step with the payment history by every lifecycle transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Internal key, assigned once at registration.
    pub id: String,
    /// Human-facing code such as `A24007`.
    #[serde(rename = "memberId")]
    pub member_code: String,
    pub name: String,
    pub phone: String,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub join_date: DateTime<Utc>,
    pub membership_expiry: DateTime<Utc>,
    pub payments: Vec<Payment>,
    pub photo_url: String,
}

impl Member {
    pub fn status(&self, now: DateTime<Utc>) -> MembershipStatus {
        if self.membership_expiry >= now {
            MembershipStatus::Active
        } else {
            MembershipStatus::Expired
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.status(now) == MembershipStatus::Active
    }

    pub fn last_payment(&self) -> Option<&Payment> {
        self.payments.last()
    }

    /// The registration payment, which carries the entry fee.
    pub fn initial_payment(&self) -> Option<&Payment> {
        self.payments.first()
    }

    pub fn total_paid(&self) -> u64 {
        self.payments
            .iter()
            .fold(0u64, |total, p| total.saturating_add(p.amount))
    }
}

/// Stored snapshots may carry `""` for a member without email.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_json(email: &str) -> String {
        format!(
            r#"{{"id":"mem_1","memberId":"A24001","name":"Asha","phone":"+919811111111",{}
                "joinDate":"2024-01-15T00:00:00Z","membershipExpiry":"2024-04-15T00:00:00Z",
                "payments":[],"photoUrl":""}}"#,
            email
        )
    }

    #[test]
    fn blank_stored_email_loads_as_absent() {
        let blank: Member = serde_json::from_str(&member_json(r#""email":"  ","#)).unwrap();
        assert_eq!(blank.email, None);

        let missing: Member = serde_json::from_str(&member_json("")).unwrap();
        assert_eq!(missing.email, None);

        let set: Member = serde_json::from_str(&member_json(r#""email":"asha@example.com","#)).unwrap();
        assert_eq!(set.email.as_deref(), Some("asha@example.com"));
    }
}
