use serde::{Deserialize, Serialize};

/// A purchasable membership tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub id: String,
    pub name: String,
    pub duration_months: u32,
    pub price: u64,
}

impl MembershipPlan {
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration_months: u32, price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_months,
            price,
        }
    }
}

/// The four tiers a fresh installation starts with.
pub fn default_catalog() -> Vec<MembershipPlan> {
    vec![
        MembershipPlan::new("1m", "1 Month", 1, 1000),
        MembershipPlan::new("3m", "3 Months", 3, 2500),
        MembershipPlan::new("6m", "6 Months", 6, 4500),
        MembershipPlan::new("12m", "1 Year", 12, 8000),
    ]
}
