use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::billing::{allocate_member_code, calculate_expiry};
use crate::domain::{AppData, Member, Payment, PaymentMode, DEFAULT_AVATAR_URL, ENTRY_FEE};
use crate::error::{GymError, GymResult};

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+91\d{10}$").expect("phone pattern is valid"));

/// Everything the registration form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub join_date: NaiveDate,
    pub plan_id: String,
    pub payment_mode: PaymentMode,
    /// Falls back to the default avatar.
    pub photo_url: Option<String>,
}

impl RegistrationDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        join_date: NaiveDate,
        plan_id: impl Into<String>,
        payment_mode: PaymentMode,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            join_date,
            plan_id: plan_id.into(),
            payment_mode,
            photo_url: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_photo(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }
}

/// Checks the national `+91XXXXXXXXXX` format.
pub fn validate_phone(phone: &str) -> GymResult<()> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(GymError::validation(format!(
            "phone number must be in the format +91XXXXXXXXXX, got {:?}",
            phone
        )))
    }
}

/// Amount collected at registration for a plan price.
pub fn registration_total(plan_price: u64) -> GymResult<u64> {
    plan_price
        .checked_add(ENTRY_FEE)
        .ok_or_else(|| GymError::validation(format!("plan price {} is too large", plan_price)))
}

/// Registers a new member who starts Active.
///
/// Expiry is the join date advanced by the plan duration, and the single
/// payment is the plan price plus the entry fee, dated at the join date.
pub fn register_member(data: &mut AppData, draft: RegistrationDraft, now: DateTime<Utc>) -> GymResult<Member> {
    let name = draft.name.trim();
    let phone = draft.phone.trim();
    if name.is_empty() || phone.is_empty() || draft.plan_id.trim().is_empty() {
        return Err(GymError::validation("name, phone and plan are required"));
    }
    validate_phone(phone)?;

    let plan = data
        .plan(&draft.plan_id)
        .ok_or_else(|| GymError::PlanNotFound(draft.plan_id.clone()))?;

    let join_date = draft.join_date.and_time(NaiveTime::MIN).and_utc();
    let payment = Payment::new(join_date, registration_total(plan.price)?, plan.id.clone(), draft.payment_mode);

    let member = Member {
        id: format!("mem_{}", uuid::Uuid::new_v4().simple()),
        member_code: allocate_member_code(data.members.values(), now),
        name: name.to_string(),
        phone: phone.to_string(),
        email: draft
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty()),
        join_date,
        membership_expiry: calculate_expiry(join_date, plan.duration_months),
        payments: vec![payment],
        photo_url: draft
            .photo_url
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
    };

    data.members.insert(member.id.clone(), member.clone());
    Ok(member)
}
