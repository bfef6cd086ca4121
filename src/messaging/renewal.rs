use serde::Serialize;
use urlencoding::encode;

use super::upi_payment_uri;
use crate::domain::{GymProfile, Member, MembershipPlan, FALLBACK_RENEWAL_AMOUNT};
use crate::format::{format_date, weekday_name};

const RENEWAL_NOTE: &str = "Membership Renewal";
const CONTACT_FALLBACK: &str = "Please contact the gym to renew.";

/// The same reminder text packaged for two channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenewalLinks {
    pub message: String,
    pub whatsapp: String,
    pub sms: String,
}

/// Amount quoted in a renewal link.
///
/// Uses the plan of the member's most recent payment; a member without
/// payments is quoted the first catalog plan. A plan that has left the
/// catalog falls back to [`FALLBACK_RENEWAL_AMOUNT`].
pub fn renewal_amount(member: &Member, plans: &[MembershipPlan]) -> u64 {
    let plan = match member.last_payment() {
        Some(payment) => plans.iter().find(|p| p.id == payment.plan_id),
        None => plans.first(),
    };
    plan.map(|p| p.price).unwrap_or(FALLBACK_RENEWAL_AMOUNT)
}

/// Human-readable reminder. A negative `days_remaining` means the membership
/// has already lapsed.
pub fn renewal_message(
    member: &Member,
    profile: &GymProfile,
    days_remaining: i64,
    plans: &[MembershipPlan],
) -> String {
    let gym = profile.display_name();
    let weekday = weekday_name(member.membership_expiry);
    let access = match days_remaining {
        d if d < 0 => format!("expired on {}, {}", weekday, format_date(member.membership_expiry)),
        0 => format!("expires today, {}", weekday),
        1..=6 => format!("expires this {}", weekday),
        _ => format!("expires on {}, {}", weekday, format_date(member.membership_expiry)),
    };

    let renewal_link = match profile.upi_address() {
        Some(address) => upi_payment_uri(address, gym, renewal_amount(member, plans), RENEWAL_NOTE),
        None => CONTACT_FALLBACK.to_string(),
    };

    format!(
        "🚨 {gym} Alert 🚨\n\n\
         Hi {name}, your gym access {access}!\n\n\
         Avoid the hassle of re-joining and a potential price increase. Lock in your current rate now!\n\n\
         Renew here to keep your fitness journey on track:\n\
         {renewal_link}\n\n\
         Don't let your progress slip away! 🔥",
        gym = gym,
        name = member.name,
        access = access,
        renewal_link = renewal_link,
    )
}

/// Builds the WhatsApp and SMS deep links for a renewal reminder.
pub fn generate_renewal_links(
    member: &Member,
    profile: &GymProfile,
    days_remaining: i64,
    plans: &[MembershipPlan],
) -> RenewalLinks {
    let message = renewal_message(member, profile, days_remaining, plans);
    let encoded = encode(&message);
    let whatsapp_number = member.phone.trim_start_matches('+');

    RenewalLinks {
        whatsapp: format!("https://wa.me/{}?text={}", whatsapp_number, encoded),
        sms: format!("sms:{}?body={}", member.phone, encoded),
        message,
    }
}
