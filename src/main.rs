use chrono::Utc;
use tracing::{error, info, Instrument};

use gym_admin::app_system::{setup_tracing, GymConfig, GymSystem};
use gym_admin::domain::PaymentMode;
use gym_admin::format::{format_currency, format_date};
use gym_admin::lifecycle::{ExpiryWindow, RegistrationDraft};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = GymConfig::from_env();
    info!(data_dir = %config.data_dir.display(), "Starting gym admin");

    let system = GymSystem::new(&config).map_err(|e| e.to_string())?;

    let draft = RegistrationDraft::new(
        "Asha Rao",
        "+919876543210",
        Utc::now().date_naive(),
        "3m",
        PaymentMode::Upi,
    );

    let span = tracing::info_span!("registration");
    let member = async {
        info!("Registering demo member");
        system.client.register_member(draft).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        member_code = %member.member_code,
        expiry = %format_date(member.membership_expiry),
        paid = %format_currency(member.total_paid()),
        "Member registered"
    );

    let span = tracing::info_span!("renewal");
    let renewal = async {
        info!("Renewing for one month");
        system
            .client
            .renew_membership(member.id.clone(), "1m".to_string(), PaymentMode::Cash)
            .await
    }
    .instrument(span)
    .await;

    match renewal {
        Ok(renewed) => info!(expiry = %format_date(renewed.membership_expiry), "Membership renewed"),
        Err(e) => error!(error = %e, "Renewal failed"),
    }

    match system.client.renewal_links(member.id.clone()).await {
        Ok(links) => info!(whatsapp = %links.whatsapp, "Renewal reminder ready"),
        Err(e) => error!(error = %e, "Could not build reminder"),
    }

    match system.client.expiring_members(ExpiryWindow::TenDays).await {
        Ok(expiring) => info!(count = expiring.len(), "Members expiring within 10 days"),
        Err(e) => error!(error = %e, "Could not list expiring members"),
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
