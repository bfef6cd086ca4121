use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{default_catalog, GymProfile, Member, MembershipPlan};

/// Root aggregate and unit of persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    /// Keyed by `Member::id`.
    #[serde(default)]
    pub members: HashMap<String, Member>,
    #[serde(default)]
    pub profile: GymProfile,
    #[serde(default = "default_catalog")]
    pub plans: Vec<MembershipPlan>,
}

impl Default for AppData {
    fn default() -> Self {
        Self::seed()
    }
}

impl AppData {
    /// First-run snapshot: no members, blank profile, the default plan catalog.
    pub fn seed() -> Self {
        Self {
            members: HashMap::new(),
            profile: GymProfile::default(),
            plans: default_catalog(),
        }
    }

    pub fn plan(&self, plan_id: &str) -> Option<&MembershipPlan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
