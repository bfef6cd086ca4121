use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::billing::days_until_expiry;
use crate::domain::{AppData, Member};

/// Member list filter on derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFilter {
    pub status: StatusFilter,
    /// Matches name or member code case-insensitively, or a phone substring.
    pub search: String,
}

impl MemberFilter {
    pub fn status(status: StatusFilter) -> Self {
        Self {
            status,
            search: String::new(),
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            status: StatusFilter::All,
            search: term.into(),
        }
    }

    fn matches(&self, member: &Member, now: DateTime<Utc>) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => member.is_active(now),
            StatusFilter::Inactive => !member.is_active(now),
        };
        if !status_ok {
            return false;
        }

        let term = self.search.trim().to_lowercase();
        term.is_empty()
            || member.name.to_lowercase().contains(&term)
            || member.phone.contains(&term)
            || member.member_code.to_lowercase().contains(&term)
    }
}

/// Matching members, most recently joined first.
pub fn list_members(data: &AppData, filter: &MemberFilter, now: DateTime<Utc>) -> Vec<Member> {
    let mut members: Vec<Member> = data
        .members
        .values()
        .filter(|m| filter.matches(m, now))
        .cloned()
        .collect();
    members.sort_by(|a, b| b.join_date.cmp(&a.join_date).then_with(|| a.member_code.cmp(&b.member_code)));
    members
}

/// The dashboard's reminder windows. Each covers the days left over from the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpiryWindow {
    ThreeDays,
    SevenDays,
    TenDays,
}

impl ExpiryWindow {
    pub const ALL: [ExpiryWindow; 3] = [ExpiryWindow::ThreeDays, ExpiryWindow::SevenDays, ExpiryWindow::TenDays];

    pub fn days(self) -> i64 {
        match self {
            ExpiryWindow::ThreeDays => 3,
            ExpiryWindow::SevenDays => 7,
            ExpiryWindow::TenDays => 10,
        }
    }

    pub fn from_days(days: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }

    pub fn contains(self, days_left: i64) -> bool {
        match self {
            ExpiryWindow::ThreeDays => (0..=3).contains(&days_left),
            ExpiryWindow::SevenDays => (4..=7).contains(&days_left),
            ExpiryWindow::TenDays => (8..=10).contains(&days_left),
        }
    }
}

/// Members whose remaining days fall inside `window`, soonest first.
pub fn expiring_members(data: &AppData, window: ExpiryWindow, now: DateTime<Utc>) -> Vec<Member> {
    let mut members: Vec<Member> = data
        .members
        .values()
        .filter(|m| window.contains(days_until_expiry(m.membership_expiry, now)))
        .cloned()
        .collect();
    members.sort_by_key(|m| m.membership_expiry);
    members
}

/// All three windows at once, as shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpiringBuckets {
    pub within_3_days: Vec<Member>,
    pub within_7_days: Vec<Member>,
    pub within_10_days: Vec<Member>,
}

pub fn expiring_buckets(data: &AppData, now: DateTime<Utc>) -> ExpiringBuckets {
    ExpiringBuckets {
        within_3_days: expiring_members(data, ExpiryWindow::ThreeDays, now),
        within_7_days: expiring_members(data, ExpiryWindow::SevenDays, now),
        within_10_days: expiring_members(data, ExpiryWindow::TenDays, now),
    }
}
