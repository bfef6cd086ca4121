//! Screens the presentation layer can show, each carrying only what it needs.

use serde::{Deserialize, Serialize};

use crate::lifecycle::ExpiryWindow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[default]
    Dashboard,
    Members,
    AddMember,
    MemberDetail { member_id: String },
    Profile,
    ExpiringMembers { window: ExpiryWindow },
    Pricing,
    Payments,
}

impl View {
    pub fn title(&self) -> String {
        match self {
            View::Dashboard => "Dashboard".to_string(),
            View::Members => "Members".to_string(),
            View::AddMember => "Add Member".to_string(),
            View::MemberDetail { .. } => "Member Detail".to_string(),
            View::Profile => "Profile".to_string(),
            View::ExpiringMembers { window } => format!("Expiring in {} Days", window.days()),
            View::Pricing => "Membership Pricing".to_string(),
            View::Payments => "Payment History".to_string(),
        }
    }

    pub fn shows_back_button(&self) -> bool {
        matches!(self, View::MemberDetail { .. } | View::ExpiringMembers { .. })
    }

    /// Where the back button leads. Views without one stay put.
    pub fn back(&self) -> View {
        match self {
            View::MemberDetail { .. } => View::Members,
            View::ExpiringMembers { .. } => View::Dashboard,
            other => other.clone(),
        }
    }
}
