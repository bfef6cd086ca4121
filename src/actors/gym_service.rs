use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::billing::{allocate_member_code, days_until_expiry};
use crate::clients::GymClient;
use crate::clock::Clock;
use crate::domain::{AppData, GymProfile, Member, PaymentMode};
use crate::error::{GymError, GymResult};
use crate::lifecycle::{
    self, DeletionConfirmation, ExpiryWindow, MemberFilter, PaymentPeriod, RegistrationDraft,
};
use crate::messages::{GymRequest, ServiceResponse};
use crate::messaging::{generate_renewal_links, registration_payment_link};
use crate::store::AppStore;

/// Owns the `AppData` snapshot and applies one request at a time.
///
/// Mutations run against a copy of the snapshot; the copy is persisted and
/// only then replaces the owned value. A failed validation or a failed save
/// therefore leaves the last good snapshot in place.
pub struct GymService {
    receiver: mpsc::Receiver<GymRequest>,
    data: AppData,
    store: Box<dyn AppStore>,
    storage_key: String,
    clock: Arc<dyn Clock>,
}

impl GymService {
    pub fn new(
        buffer_size: usize,
        data: AppData,
        store: Box<dyn AppStore>,
        storage_key: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> (Self, GymClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            data,
            store,
            storage_key: storage_key.into(),
            clock,
        };
        (service, GymClient::new(sender))
    }

    #[instrument(name = "gym_service", skip(self))]
    pub async fn run(mut self) {
        info!(members = self.data.member_count(), "GymService starting");

        while let Some(msg) = self.receiver.recv().await {
            // One reading of the clock per request.
            let now = self.clock.now();
            match msg {
                GymRequest::RegisterMember { draft, respond_to } => {
                    self.handle_register_member(draft, now, respond_to);
                }
                GymRequest::RenewMembership {
                    member_id,
                    plan_id,
                    mode,
                    respond_to,
                } => {
                    self.handle_renew_membership(member_id, plan_id, mode, now, respond_to);
                }
                GymRequest::UpdatePhoto {
                    member_id,
                    photo_url,
                    respond_to,
                } => {
                    self.handle_update_photo(member_id, photo_url, respond_to);
                }
                GymRequest::DeleteMember {
                    member_id,
                    confirmation,
                    respond_to,
                } => {
                    self.handle_delete_member(member_id, confirmation, respond_to);
                }
                GymRequest::GetMember { member_id, respond_to } => {
                    let _ = respond_to.send(Ok(self.data.member(&member_id).cloned()));
                }
                GymRequest::ListMembers { filter, respond_to } => {
                    self.handle_list_members(filter, now, respond_to);
                }
                GymRequest::MemberStatus { member_id, respond_to } => {
                    let result = self
                        .find_member(&member_id)
                        .map(|member| member.status(now));
                    let _ = respond_to.send(result);
                }
                GymRequest::NextMemberCode { respond_to } => {
                    let _ = respond_to.send(Ok(allocate_member_code(self.data.members.values(), now)));
                }
                GymRequest::GetProfile { respond_to } => {
                    let _ = respond_to.send(Ok(self.data.profile.clone()));
                }
                GymRequest::SaveProfile { profile, respond_to } => {
                    self.handle_save_profile(profile, respond_to);
                }
                GymRequest::ListPlans { respond_to } => {
                    let _ = respond_to.send(Ok(self.data.plans.clone()));
                }
                GymRequest::UpdatePlanPrices { prices, respond_to } => {
                    self.handle_update_plan_prices(prices, respond_to);
                }
                GymRequest::RegistrationPaymentLink {
                    name,
                    plan_id,
                    mode,
                    respond_to,
                } => {
                    self.handle_registration_payment_link(name, plan_id, mode, respond_to);
                }
                GymRequest::RenewalLinks { member_id, respond_to } => {
                    self.handle_renewal_links(member_id, now, respond_to);
                }
                GymRequest::ExpiringMembers { window, respond_to } => {
                    self.handle_expiring_members(window, now, respond_to);
                }
                GymRequest::ExpiringBuckets { respond_to } => {
                    let _ = respond_to.send(Ok(lifecycle::expiring_buckets(&self.data, now)));
                }
                GymRequest::PaymentHistory { period, respond_to } => {
                    self.handle_payment_history(period, respond_to);
                }
                GymRequest::MonthlyRevenue { year, respond_to } => {
                    let _ = respond_to.send(Ok(lifecycle::monthly_revenue(&self.data, year)));
                }
                GymRequest::RevenueYears { respond_to } => {
                    let _ = respond_to.send(Ok(lifecycle::revenue_years(&self.data, now)));
                }
                GymRequest::Invoice {
                    member_id,
                    payment_id,
                    respond_to,
                } => {
                    self.handle_invoice(member_id, payment_id, respond_to);
                }
                GymRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.data.clone()));
                }
                GymRequest::Shutdown => {
                    info!("GymService shutting down");
                    break;
                }
            }
        }

        info!("GymService stopped");
    }

    /// Runs `op` on a copy of the snapshot, persists the copy, then adopts it.
    fn commit<T>(&mut self, op: impl FnOnce(&mut AppData) -> GymResult<T>) -> GymResult<T> {
        let mut next = self.data.clone();
        let value = op(&mut next)?;

        if let Err(e) = self.store.save(&self.storage_key, &next) {
            error!(error = %e, key = %self.storage_key, "Failed to persist snapshot");
            return Err(e.into());
        }

        self.data = next;
        Ok(value)
    }

    fn find_member(&self, member_id: &str) -> GymResult<&Member> {
        self.data
            .member(member_id)
            .ok_or_else(|| GymError::MemberNotFound(member_id.to_string()))
    }

    #[instrument(fields(plan_id = %draft.plan_id, join_date = %draft.join_date), skip(self, draft, now, respond_to))]
    fn handle_register_member(
        &mut self,
        draft: RegistrationDraft,
        now: DateTime<Utc>,
        respond_to: ServiceResponse<Member>,
    ) {
        debug!("Processing register_member request");

        let result = self.commit(|data| lifecycle::register_member(data, draft, now));
        match &result {
            Ok(member) => info!(
                member_id = %member.id,
                member_code = %member.member_code,
                amount = member.total_paid(),
                expiry = %member.membership_expiry,
                "Member registered"
            ),
            Err(e) => warn!(error = %e, "Registration rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(member_id = %member_id, plan_id = %plan_id, mode = %mode), skip(self, now, respond_to))]
    fn handle_renew_membership(
        &mut self,
        member_id: String,
        plan_id: String,
        mode: PaymentMode,
        now: DateTime<Utc>,
        respond_to: ServiceResponse<Member>,
    ) {
        debug!("Processing renew_membership request");

        let result = self.commit(|data| lifecycle::renew_membership(data, &member_id, &plan_id, mode, now));
        match &result {
            Ok(member) => info!(
                expiry = %member.membership_expiry,
                payments = member.payments.len(),
                "Membership renewed"
            ),
            Err(e) => warn!(error = %e, "Renewal rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(member_id = %member_id), skip(self, photo_url, respond_to))]
    fn handle_update_photo(&mut self, member_id: String, photo_url: String, respond_to: ServiceResponse<Member>) {
        debug!(photo_bytes = photo_url.len(), "Processing update_photo request");

        let result = self.commit(|data| lifecycle::update_photo(data, &member_id, photo_url));
        match &result {
            Ok(_) => info!("Photo updated"),
            Err(e) => warn!(error = %e, "Photo update rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(member_id = %member_id), skip(self, confirmation, respond_to))]
    fn handle_delete_member(
        &mut self,
        member_id: String,
        confirmation: DeletionConfirmation,
        respond_to: ServiceResponse<Member>,
    ) {
        debug!("Processing delete_member request");

        let result = self.commit(|data| lifecycle::delete_member(data, &member_id, &confirmation));
        match &result {
            Ok(member) => info!(
                member_code = %member.member_code,
                payments = member.payments.len(),
                "Member deleted"
            ),
            Err(e) => warn!(error = %e, "Deletion rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(status = ?filter.status), skip(self, filter, now, respond_to))]
    fn handle_list_members(&self, filter: MemberFilter, now: DateTime<Utc>, respond_to: ServiceResponse<Vec<Member>>) {
        let members = lifecycle::list_members(&self.data, &filter, now);
        debug!(count = members.len(), "Members listed");
        let _ = respond_to.send(Ok(members));
    }

    #[instrument(skip(self, profile, respond_to))]
    fn handle_save_profile(&mut self, profile: GymProfile, respond_to: ServiceResponse<GymProfile>) {
        debug!("Processing save_profile request");

        let result = self.commit(|data| Ok(lifecycle::save_profile(data, profile)));
        if let Ok(profile) = &result {
            info!(gym_name = %profile.display_name(), "Profile saved");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(plans = prices.len()), skip(self, prices, respond_to))]
    fn handle_update_plan_prices(
        &mut self,
        prices: HashMap<String, u64>,
        respond_to: ServiceResponse<Vec<crate::domain::MembershipPlan>>,
    ) {
        debug!("Processing update_plan_prices request");

        let result = self.commit(|data| lifecycle::update_plan_prices(data, &prices));
        match &result {
            Ok(_) => info!("Plan prices updated"),
            Err(e) => warn!(error = %e, "Price update rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(plan_id = %plan_id, mode = %mode), skip(self, name, respond_to))]
    fn handle_registration_payment_link(
        &self,
        name: String,
        plan_id: String,
        mode: PaymentMode,
        respond_to: ServiceResponse<Option<String>>,
    ) {
        let result = self
            .data
            .plan(&plan_id)
            .ok_or_else(|| GymError::PlanNotFound(plan_id.clone()))
            .and_then(|plan| lifecycle::registration_total(plan.price))
            .map(|total| registration_payment_link(&self.data.profile, &name, total, mode));

        let _ = respond_to.send(result);
    }

    #[instrument(fields(member_id = %member_id), skip(self, now, respond_to))]
    fn handle_renewal_links(
        &self,
        member_id: String,
        now: DateTime<Utc>,
        respond_to: ServiceResponse<crate::messaging::RenewalLinks>,
    ) {
        let result = self.find_member(&member_id).map(|member| {
            let days = days_until_expiry(member.membership_expiry, now);
            debug!(days, "Building renewal reminder");
            generate_renewal_links(member, &self.data.profile, days, &self.data.plans)
        });

        let _ = respond_to.send(result);
    }

    #[instrument(fields(days = window.days()), skip(self, now, respond_to))]
    fn handle_expiring_members(&self, window: ExpiryWindow, now: DateTime<Utc>, respond_to: ServiceResponse<Vec<Member>>) {
        let members = lifecycle::expiring_members(&self.data, window, now);
        debug!(count = members.len(), "Expiring members found");
        let _ = respond_to.send(Ok(members));
    }

    #[instrument(fields(year = period.year, month = ?period.month), skip(self, respond_to))]
    fn handle_payment_history(
        &self,
        period: PaymentPeriod,
        respond_to: ServiceResponse<Vec<lifecycle::PaymentRecord>>,
    ) {
        let records = lifecycle::payment_history(&self.data, period);
        debug!(count = records.len(), "Payment history collected");
        let _ = respond_to.send(Ok(records));
    }

    #[instrument(fields(member_id = %member_id, payment_id = %payment_id), skip(self, respond_to))]
    fn handle_invoice(&self, member_id: String, payment_id: String, respond_to: ServiceResponse<lifecycle::Invoice>) {
        let result = self.find_member(&member_id).and_then(|member| {
            member
                .payments
                .iter()
                .find(|p| p.id == payment_id)
                .map(|payment| lifecycle::invoice_for(member, payment, &self.data.plans))
                .ok_or_else(|| GymError::PaymentNotFound(payment_id.clone()))
        });

        let _ = respond_to.send(result);
    }
}
