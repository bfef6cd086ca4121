use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::billing::calculate_expiry;
use crate::domain::{AppData, Member, Payment, PaymentMode};
use crate::error::{GymError, GymResult};

/// Proof that the operator confirmed removing one specific member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionConfirmation {
    member_id: String,
}

impl DeletionConfirmation {
    pub fn confirm(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
        }
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }
}

/// Start of the next membership period.
///
/// Renewing early extends from the current expiry; renewing a lapsed
/// membership restarts from `now`.
pub fn renewal_start(current_expiry: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    current_expiry.max(now)
}

/// Appends a plan-price payment (no entry fee) and moves the expiry forward.
pub fn renew_membership(
    data: &mut AppData,
    member_id: &str,
    plan_id: &str,
    mode: PaymentMode,
    now: DateTime<Utc>,
) -> GymResult<Member> {
    let plan = data
        .plan(plan_id)
        .cloned()
        .ok_or_else(|| GymError::PlanNotFound(plan_id.to_string()))?;
    let member = data
        .members
        .get_mut(member_id)
        .ok_or_else(|| GymError::MemberNotFound(member_id.to_string()))?;

    let start = renewal_start(member.membership_expiry, now);
    member.membership_expiry = calculate_expiry(start, plan.duration_months);
    member.payments.push(Payment::new(now, plan.price, plan.id, mode));

    Ok(member.clone())
}

/// Replaces the member's photo reference. Expiry and status are untouched.
pub fn update_photo(data: &mut AppData, member_id: &str, photo_url: impl Into<String>) -> GymResult<Member> {
    let photo_url = photo_url.into();
    if photo_url.trim().is_empty() {
        return Err(GymError::validation("photo reference must not be empty"));
    }

    let member = data
        .members
        .get_mut(member_id)
        .ok_or_else(|| GymError::MemberNotFound(member_id.to_string()))?;
    member.photo_url = photo_url;
    Ok(member.clone())
}

/// Permanently removes a member together with its payments.
pub fn delete_member(
    data: &mut AppData,
    member_id: &str,
    confirmation: &DeletionConfirmation,
) -> GymResult<Member> {
    if confirmation.member_id() != member_id {
        return Err(GymError::DeletionNotConfirmed(member_id.to_string()));
    }
    data.members
        .remove(member_id)
        .ok_or_else(|| GymError::MemberNotFound(member_id.to_string()))
}
