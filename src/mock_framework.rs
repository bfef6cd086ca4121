//! # Mock Framework
//!
//! Utilities for testing [`GymClient`] callers without a running service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then helpers like [`expect_register`] or [`expect_renew`] to assert
//! what was sent and to script the reply.

use tokio::sync::mpsc;

use crate::clients::GymClient;
use crate::domain::{Member, PaymentMode};
use crate::lifecycle::RegistrationDraft;
use crate::messages::{GymRequest, ServiceResponse};
use crate::messaging::RenewalLinks;

/// Creates a client whose requests land in the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (GymClient, mpsc::Receiver<GymRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (GymClient::new(sender), receiver)
}

/// Next message must be a RegisterMember request.
pub async fn expect_register(
    receiver: &mut mpsc::Receiver<GymRequest>,
) -> Option<(RegistrationDraft, ServiceResponse<Member>)> {
    match receiver.recv().await {
        Some(GymRequest::RegisterMember { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Next message must be a RenewMembership request.
pub async fn expect_renew(
    receiver: &mut mpsc::Receiver<GymRequest>,
) -> Option<(String, String, PaymentMode, ServiceResponse<Member>)> {
    match receiver.recv().await {
        Some(GymRequest::RenewMembership {
            member_id,
            plan_id,
            mode,
            respond_to,
        }) => Some((member_id, plan_id, mode, respond_to)),
        _ => None,
    }
}

/// Next message must be a GetMember request.
pub async fn expect_get_member(
    receiver: &mut mpsc::Receiver<GymRequest>,
) -> Option<(String, ServiceResponse<Option<Member>>)> {
    match receiver.recv().await {
        Some(GymRequest::GetMember { member_id, respond_to }) => Some((member_id, respond_to)),
        _ => None,
    }
}

/// Next message must be a RenewalLinks request.
pub async fn expect_renewal_links(
    receiver: &mut mpsc::Receiver<GymRequest>,
) -> Option<(String, ServiceResponse<RenewalLinks>)> {
    match receiver.recv().await {
        Some(GymRequest::RenewalLinks { member_id, respond_to }) => Some((member_id, respond_to)),
        _ => None,
    }
}

/// Next message must be Shutdown.
pub async fn expect_shutdown(receiver: &mut mpsc::Receiver<GymRequest>) -> bool {
    matches!(receiver.recv().await, Some(GymRequest::Shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GymError;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_mock_client_register() {
        let (client, mut receiver) = create_mock_client(10);

        let register_task = tokio::spawn(async move {
            let join = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
            let draft = RegistrationDraft::new("Test", "+919876543210", join, "3m", PaymentMode::Cash);
            client.register_member(draft).await
        });

        let (draft, responder) = expect_register(&mut receiver).await.expect("Expected RegisterMember request");
        assert_eq!(draft.name, "Test");
        assert_eq!(draft.plan_id, "3m");
        responder.send(Err(GymError::validation("scripted"))).unwrap();

        let result = register_task.await.unwrap();
        assert_eq!(result, Err(GymError::validation("scripted")));
    }

    #[tokio::test]
    async fn test_mock_client_get_member() {
        let (client, mut receiver) = create_mock_client(10);

        let get_task = tokio::spawn(async move { client.get_member("mem_1".to_string()).await });

        let (member_id, responder) = expect_get_member(&mut receiver).await.expect("Expected GetMember request");
        assert_eq!(member_id, "mem_1");
        responder.send(Ok(None)).unwrap();

        assert_eq!(get_task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let renew_task =
            tokio::spawn(async move { client.renew_membership("mem_1".into(), "1m".into(), PaymentMode::Upi).await });

        let (_, plan_id, mode, responder) = expect_renew(&mut receiver).await.expect("Expected RenewMembership request");
        assert_eq!(plan_id, "1m");
        assert_eq!(mode, PaymentMode::Upi);
        drop(responder);

        let result = renew_task.await.unwrap();
        assert!(matches!(result, Err(GymError::ActorCommunication(_))));
    }

    #[tokio::test]
    async fn test_closed_service_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let result = client.next_member_code().await;
        assert!(matches!(result, Err(GymError::ActorCommunication(_))));
        assert!(client.shutdown().await.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_renewal_links() {
        let (client, mut receiver) = create_mock_client(10);

        let links_task = tokio::spawn(async move { client.renewal_links("mem_1".to_string()).await });

        let (member_id, responder) = expect_renewal_links(&mut receiver).await.expect("Expected RenewalLinks request");
        assert_eq!(member_id, "mem_1");
        responder
            .send(Err(GymError::MemberNotFound(member_id)))
            .unwrap();

        assert_eq!(links_task.await.unwrap(), Err(GymError::MemberNotFound("mem_1".to_string())));
    }

    #[tokio::test]
    async fn test_shutdown_message() {
        let (client, mut receiver) = create_mock_client(10);
        client.shutdown().await.unwrap();
        assert!(expect_shutdown(&mut receiver).await);
    }
}
