use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AppData, Member, MembershipPlan, Payment, PaymentMode, ENTRY_FEE};

/// A payment joined with the member it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRecord {
    pub payment: Payment,
    pub member_id: String,
    pub member_code: String,
    pub member_name: String,
    pub member_photo_url: String,
}

/// Year plus an optional month (1..=12); `None` means the whole year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    pub year: i32,
    pub month: Option<u32>,
}

impl PaymentPeriod {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self { year, month: Some(month) }
    }

    fn contains(&self, date: DateTime<Utc>) -> bool {
        date.year() == self.year && self.month.map_or(true, |m| date.month() == m)
    }
}

/// Every payment in `period`, newest first.
pub fn payment_history(data: &AppData, period: PaymentPeriod) -> Vec<PaymentRecord> {
    let mut records: Vec<PaymentRecord> = data
        .members
        .values()
        .flat_map(|member| {
            member
                .payments
                .iter()
                .filter(|p| period.contains(p.date))
                .map(move |payment| PaymentRecord {
                    payment: payment.clone(),
                    member_id: member.id.clone(),
                    member_code: member.member_code.clone(),
                    member_name: member.name.clone(),
                    member_photo_url: member.photo_url.clone(),
                })
        })
        .collect();
    records.sort_by(|a, b| b.payment.date.cmp(&a.payment.date));
    records
}

/// Revenue per calendar month of `year`; index 0 is January.
pub fn monthly_revenue(data: &AppData, year: i32) -> [u64; 12] {
    let mut months = [0u64; 12];
    for payment in data.members.values().flat_map(|m| m.payments.iter()) {
        if payment.date.year() == year {
            let slot = &mut months[payment.date.month0() as usize];
            *slot = slot.saturating_add(payment.amount);
        }
    }
    months
}

pub fn yearly_revenue(data: &AppData, year: i32) -> u64 {
    monthly_revenue(data, year)
        .iter()
        .fold(0u64, |total, month| total.saturating_add(*month))
}

/// Years with at least one payment, newest first. Falls back to the current
/// year when there is no payment at all.
pub fn revenue_years(data: &AppData, now: DateTime<Utc>) -> Vec<i32> {
    let mut years: Vec<i32> = data
        .members
        .values()
        .flat_map(|m| m.payments.iter().map(|p| p.date.year()))
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    if years.is_empty() {
        years.push(now.year());
    }
    years
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    pub description: String,
    pub amount: u64,
}

/// Printable breakdown of one payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub payment_id: String,
    pub member_code: String,
    pub member_name: String,
    pub lines: Vec<InvoiceLine>,
    pub mode: PaymentMode,
    pub total: u64,
}

/// The registration payment is split into membership and entry fee; any
/// later payment is a single membership line.
pub fn invoice_for(member: &Member, payment: &Payment, plans: &[MembershipPlan]) -> Invoice {
    let plan_name = plans
        .iter()
        .find(|p| p.id == payment.plan_id)
        .map(|p| p.name.as_str())
        .unwrap_or("N/A");
    let membership = format!("{} Membership", plan_name);
    let is_initial = member.initial_payment().is_some_and(|first| first.id == payment.id);

    let lines = if is_initial {
        vec![
            InvoiceLine {
                description: membership,
                amount: payment.amount.saturating_sub(ENTRY_FEE),
            },
            InvoiceLine {
                description: "One-time Entry Fee".to_string(),
                amount: ENTRY_FEE.min(payment.amount),
            },
        ]
    } else {
        vec![InvoiceLine {
            description: membership,
            amount: payment.amount,
        }]
    };

    Invoice {
        payment_id: payment.id.clone(),
        member_code: member.member_code.clone(),
        member_name: member.name.clone(),
        lines,
        mode: payment.mode,
        total: payment.amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{register_member, renew_membership, RegistrationDraft};
    use chrono::{NaiveDate, TimeZone};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn data() -> (AppData, Member) {
        let mut data = AppData::seed();
        let join = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();
        let draft = RegistrationDraft::new("Asha", "+919811111111", join, "3m", PaymentMode::Upi);
        let asha = register_member(&mut data, draft, at(2023, 12, 20)).unwrap();
        renew_membership(&mut data, &asha.id, "1m", PaymentMode::Cash, at(2024, 3, 10)).unwrap();

        let join = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let draft = RegistrationDraft::new("Bala", "+919822222222", join, "1m", PaymentMode::Cash);
        register_member(&mut data, draft, at(2024, 3, 2)).unwrap();

        let asha = data.member(&asha.id).cloned().unwrap();
        (data, asha)
    }

    #[test]
    fn revenue_by_month() {
        let (data, _) = data();
        let months = monthly_revenue(&data, 2024);
        assert_eq!(months[2], 1000 + 1200);
        assert_eq!(months.iter().sum::<u64>(), 2200);
        assert_eq!(yearly_revenue(&data, 2023), 2700);
        assert_eq!(revenue_years(&data, at(2024, 6, 1)), vec![2024, 2023]);
        assert_eq!(revenue_years(&AppData::seed(), at(2024, 6, 1)), vec![2024]);
    }

    #[test]
    fn oversized_stored_amounts_saturate() {
        let (mut data, asha) = data();
        let member = data.members.get_mut(&asha.id).unwrap();
        member.payments.push(Payment::new(at(2024, 3, 20), u64::MAX, "1m", PaymentMode::Upi));

        assert_eq!(monthly_revenue(&data, 2024)[2], u64::MAX);
        assert_eq!(yearly_revenue(&data, 2024), u64::MAX);
        assert_eq!(data.member(&asha.id).unwrap().total_paid(), u64::MAX);
    }

    #[test]
    fn history_is_newest_first_and_filtered() {
        let (data, asha) = data();
        let year = payment_history(&data, PaymentPeriod::year(2024));
        assert_eq!(year.len(), 2);
        assert_eq!(year[0].payment.date, at(2024, 3, 10));
        assert_eq!(year[0].member_code, asha.member_code);
        assert_eq!(year[1].member_name, "Bala");

        assert!(payment_history(&data, PaymentPeriod::month(2024, 4)).is_empty());
        assert_eq!(payment_history(&data, PaymentPeriod::month(2023, 12)).len(), 1);
    }

    #[test]
    fn initial_invoice_splits_entry_fee() {
        let (data, asha) = data();
        let invoice = invoice_for(&asha, &asha.payments[0], &data.plans);
        assert_eq!(invoice.total, 2700);
        assert_eq!(
            invoice.lines,
            vec![
                InvoiceLine { description: "3 Months Membership".to_string(), amount: 2500 },
                InvoiceLine { description: "One-time Entry Fee".to_string(), amount: ENTRY_FEE },
            ]
        );

        let renewal = invoice_for(&asha, &asha.payments[1], &data.plans);
        assert_eq!(renewal.lines.len(), 1);
        assert_eq!(renewal.lines[0].description, "1 Month Membership");
        assert_eq!(renewal.total, 1000);
        assert_eq!(renewal.mode, PaymentMode::Cash);
    }
}
