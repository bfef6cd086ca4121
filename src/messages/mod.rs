use std::collections::HashMap;

use tokio::sync::oneshot;

use crate::domain::{AppData, GymProfile, Member, MembershipPlan, MembershipStatus, PaymentMode};
use crate::error::GymResult;
use crate::lifecycle::{
    DeletionConfirmation, ExpiringBuckets, ExpiryWindow, Invoice, MemberFilter, PaymentPeriod, PaymentRecord,
    RegistrationDraft,
};
use crate::messaging::RenewalLinks;

/// Reply channel carried by every request.
pub type ServiceResponse<T> = oneshot::Sender<GymResult<T>>;

/// Everything the presentation layer can ask of the gym service. Each variant
/// carries its parameters and a oneshot channel for the answer.
#[derive(Debug)]
pub enum GymRequest {
    // Lifecycle transitions
    RegisterMember {
        draft: RegistrationDraft,
        respond_to: ServiceResponse<Member>,
    },
    RenewMembership {
        member_id: String,
        plan_id: String,
        mode: PaymentMode,
        respond_to: ServiceResponse<Member>,
    },
    UpdatePhoto {
        member_id: String,
        photo_url: String,
        respond_to: ServiceResponse<Member>,
    },
    DeleteMember {
        member_id: String,
        confirmation: DeletionConfirmation,
        respond_to: ServiceResponse<Member>,
    },

    // Members
    GetMember {
        member_id: String,
        respond_to: ServiceResponse<Option<Member>>,
    },
    ListMembers {
        filter: MemberFilter,
        respond_to: ServiceResponse<Vec<Member>>,
    },
    MemberStatus {
        member_id: String,
        respond_to: ServiceResponse<MembershipStatus>,
    },
    NextMemberCode {
        respond_to: ServiceResponse<String>,
    },

    // Profile and pricing
    GetProfile {
        respond_to: ServiceResponse<GymProfile>,
    },
    SaveProfile {
        profile: GymProfile,
        respond_to: ServiceResponse<GymProfile>,
    },
    ListPlans {
        respond_to: ServiceResponse<Vec<MembershipPlan>>,
    },
    UpdatePlanPrices {
        prices: HashMap<String, u64>,
        respond_to: ServiceResponse<Vec<MembershipPlan>>,
    },

    // Links and reminders
    RegistrationPaymentLink {
        name: String,
        plan_id: String,
        mode: PaymentMode,
        respond_to: ServiceResponse<Option<String>>,
    },
    RenewalLinks {
        member_id: String,
        respond_to: ServiceResponse<RenewalLinks>,
    },
    ExpiringMembers {
        window: ExpiryWindow,
        respond_to: ServiceResponse<Vec<Member>>,
    },
    ExpiringBuckets {
        respond_to: ServiceResponse<ExpiringBuckets>,
    },

    // Payments and revenue
    PaymentHistory {
        period: PaymentPeriod,
        respond_to: ServiceResponse<Vec<PaymentRecord>>,
    },
    MonthlyRevenue {
        year: i32,
        respond_to: ServiceResponse<[u64; 12]>,
    },
    RevenueYears {
        respond_to: ServiceResponse<Vec<i32>>,
    },
    Invoice {
        member_id: String,
        payment_id: String,
        respond_to: ServiceResponse<Invoice>,
    },

    Snapshot {
        respond_to: ServiceResponse<AppData>,
    },
    Shutdown,
}
