use urlencoding::encode;

use crate::domain::{GymProfile, PaymentMode, CURRENCY_CODE};

const REGISTRATION_PLACEHOLDER_NAME: &str = "New Member";

/// Builds `upi://pay?pa=..&pn=..&am=..&cu=INR&tn=..` with every text field
/// percent-encoded.
pub fn upi_payment_uri(payee_address: &str, payee_name: &str, amount: u64, note: &str) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu={}&tn={}",
        encode(payee_address),
        encode(payee_name),
        amount,
        CURRENCY_CODE,
        encode(note),
    )
}

/// Payment link shown while registering a member who pays by UPI.
///
/// `None` for cash payments or when the profile has no UPI address.
pub fn registration_payment_link(
    profile: &GymProfile,
    member_name: &str,
    total_amount: u64,
    mode: PaymentMode,
) -> Option<String> {
    if mode != PaymentMode::Upi {
        return None;
    }
    let address = profile.upi_address()?;

    let name = match member_name.trim() {
        "" => REGISTRATION_PLACEHOLDER_NAME,
        trimmed => trimmed,
    };
    let note = format!("New member registration for {}", name);
    Some(upi_payment_uri(address, profile.display_name(), total_amount, &note))
}
