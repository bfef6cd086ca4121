use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{AppData, GymProfile, Member, MembershipPlan, MembershipStatus, PaymentMode};
use crate::error::{GymError, GymResult};
use crate::lifecycle::{
    DeletionConfirmation, ExpiringBuckets, ExpiryWindow, Invoice, MemberFilter, PaymentPeriod, PaymentRecord,
    RegistrationDraft,
};
use crate::messages::GymRequest;
use crate::messaging::RenewalLinks;

/// Handle to the [`GymService`](crate::actors::GymService). Cheap to clone;
/// every clone talks to the same single writer.
#[derive(Clone)]
pub struct GymClient {
    sender: mpsc::Sender<GymRequest>,
}

impl GymClient {
    pub fn new(sender: mpsc::Sender<GymRequest>) -> Self {
        Self { sender }
    }

    /// Replaces a member's photo. The payload is usually a data URI, so it
    /// stays out of the span.
    #[instrument(skip(self, photo_url))]
    pub async fn update_photo(&self, member_id: String, photo_url: String) -> GymResult<Member> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(GymRequest::UpdatePhoto {
                member_id,
                photo_url,
                respond_to,
            })
            .await
            .map_err(|_| GymError::ActorCommunication("Service closed".to_string()))?;

        response
            .await
            .map_err(|_| GymError::ActorCommunication("Service dropped reply".to_string()))?
    }

    /// Asks the service to stop after the requests already queued.
    pub async fn shutdown(&self) -> GymResult<()> {
        self.sender
            .send(GymRequest::Shutdown)
            .await
            .map_err(|_| GymError::ActorCommunication("Service closed".to_string()))
    }
}

client_method!(GymClient => fn register_member(draft: RegistrationDraft) -> Member as GymRequest::RegisterMember, skip(draft), fields(plan_id = %draft.plan_id, join_date = %draft.join_date));
client_method!(GymClient => fn renew_membership(member_id: String, plan_id: String, mode: PaymentMode) -> Member as GymRequest::RenewMembership);
client_method!(GymClient => fn delete_member(member_id: String, confirmation: DeletionConfirmation) -> Member as GymRequest::DeleteMember);
client_method!(GymClient => fn get_member(member_id: String) -> Option<Member> as GymRequest::GetMember);
client_method!(GymClient => fn list_members(filter: MemberFilter) -> Vec<Member> as GymRequest::ListMembers);
client_method!(GymClient => fn member_status(member_id: String) -> MembershipStatus as GymRequest::MemberStatus);
client_method!(GymClient => fn next_member_code() -> String as GymRequest::NextMemberCode);
client_method!(GymClient => fn get_profile() -> GymProfile as GymRequest::GetProfile);
client_method!(GymClient => fn save_profile(profile: GymProfile) -> GymProfile as GymRequest::SaveProfile, skip(profile));
client_method!(GymClient => fn list_plans() -> Vec<MembershipPlan> as GymRequest::ListPlans);
client_method!(GymClient => fn update_plan_prices(prices: HashMap<String, u64>) -> Vec<MembershipPlan> as GymRequest::UpdatePlanPrices);
client_method!(GymClient => fn registration_payment_link(name: String, plan_id: String, mode: PaymentMode) -> Option<String> as GymRequest::RegistrationPaymentLink);
client_method!(GymClient => fn renewal_links(member_id: String) -> RenewalLinks as GymRequest::RenewalLinks);
client_method!(GymClient => fn expiring_members(window: ExpiryWindow) -> Vec<Member> as GymRequest::ExpiringMembers);
client_method!(GymClient => fn expiring_buckets() -> ExpiringBuckets as GymRequest::ExpiringBuckets);
client_method!(GymClient => fn payment_history(period: PaymentPeriod) -> Vec<PaymentRecord> as GymRequest::PaymentHistory);
client_method!(GymClient => fn monthly_revenue(year: i32) -> [u64; 12] as GymRequest::MonthlyRevenue);
client_method!(GymClient => fn revenue_years() -> Vec<i32> as GymRequest::RevenueYears);
client_method!(GymClient => fn invoice(member_id: String, payment_id: String) -> Invoice as GymRequest::Invoice);
client_method!(GymClient => fn snapshot() -> AppData as GymRequest::Snapshot);

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;

    use super::*;
    use crate::mock_framework::create_mock_client;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_spans_leave_out_photos_and_profile() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (client, receiver) = create_mock_client(4);
        drop(receiver);

        let join = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let draft = RegistrationDraft::new("Asha Rao", "+919876543210", join, "3m", PaymentMode::Upi)
            .with_photo("data:image/png;base64,PHOTOBYTES");
        assert!(client.register_member(draft).await.is_err());

        let profile = GymProfile {
            bank_account: "0011223344".to_string(),
            ..GymProfile::default()
        };
        assert!(client.save_profile(profile).await.is_err());
        assert!(client
            .update_photo("mem_1".to_string(), "data:image/png;base64,PHOTOBYTES".to_string())
            .await
            .is_err());

        let output = logs.contents();
        assert!(output.contains("register_member"));
        assert!(output.contains("plan_id=3m"));
        assert!(output.contains("Sending request"));
        assert!(!output.contains("PHOTOBYTES"));
        assert!(!output.contains("0011223344"));
    }
}
