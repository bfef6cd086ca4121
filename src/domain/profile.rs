use serde::{Deserialize, Serialize};

use super::DEFAULT_GYM_NAME;

/// Business details used on invoices and in payment links. All fields may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymProfile {
    pub gym_name: String,
    pub gym_address: String,
    pub email: String,
    pub whatsapp_number: String,
    pub bank_account: String,
    pub ifsc_code: String,
    pub upi_id: String,
}

impl GymProfile {
    /// Business name, or the product name while the profile is still blank.
    pub fn display_name(&self) -> &str {
        let name = self.gym_name.trim();
        if name.is_empty() {
            DEFAULT_GYM_NAME
        } else {
            name
        }
    }

    /// Configured UPI address, if any.
    pub fn upi_address(&self) -> Option<&str> {
        let upi = self.upi_id.trim();
        (!upi.is_empty()).then_some(upi)
    }
}
