use std::collections::HashMap;

use crate::domain::{AppData, GymProfile, MembershipPlan, MAX_PLAN_PRICE};
use crate::error::{GymError, GymResult};

/// Replaces the business profile wholesale.
pub fn save_profile(data: &mut AppData, profile: GymProfile) -> GymProfile {
    data.profile = profile;
    data.profile.clone()
}

/// Reprices existing plans. Ids and durations never change here.
///
/// Every id is checked before any price is written.
pub fn update_plan_prices(data: &mut AppData, prices: &HashMap<String, u64>) -> GymResult<Vec<MembershipPlan>> {
    if let Some(unknown) = prices.keys().find(|id| data.plan(id).is_none()) {
        return Err(GymError::PlanNotFound(unknown.clone()));
    }
    if let Some((id, price)) = prices.iter().find(|(_, price)| **price > MAX_PLAN_PRICE) {
        return Err(GymError::validation(format!(
            "price {} for plan {} exceeds {}",
            price, id, MAX_PLAN_PRICE
        )));
    }

    for plan in &mut data.plans {
        if let Some(price) = prices.get(&plan.id) {
            plan.price = *price;
        }
    }
    Ok(data.plans.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprices_known_plans_only() {
        let mut data = AppData::seed();
        let prices = HashMap::from([("1m".to_string(), 1200), ("12m".to_string(), 9000)]);
        let plans = update_plan_prices(&mut data, &prices).unwrap();

        assert_eq!(plans[0].price, 1200);
        assert_eq!(plans[1].price, 2500);
        assert_eq!(plans[3].price, 9000);
        assert_eq!(plans[3].duration_months, 12);
    }

    #[test]
    fn unknown_plan_aborts_the_whole_update() {
        let mut data = AppData::seed();
        let prices = HashMap::from([("1m".to_string(), 1200), ("2m".to_string(), 1800)]);
        assert_eq!(
            update_plan_prices(&mut data, &prices),
            Err(GymError::PlanNotFound("2m".to_string()))
        );
        assert_eq!(data.plans[0].price, 1000);
    }

    #[test]
    fn oversized_price_is_rejected_before_writing() {
        let mut data = AppData::seed();
        let prices = HashMap::from([("1m".to_string(), 1200), ("3m".to_string(), u64::MAX)]);

        let result = update_plan_prices(&mut data, &prices);
        assert!(matches!(result, Err(GymError::Validation(_))));
        assert_eq!(data.plans[0].price, 1000);
        assert_eq!(data.plans[1].price, 2500);

        let at_cap = HashMap::from([("12m".to_string(), MAX_PLAN_PRICE)]);
        assert_eq!(update_plan_prices(&mut data, &at_cap).unwrap()[3].price, MAX_PLAN_PRICE);
    }

    #[test]
    fn profile_is_replaced() {
        let mut data = AppData::seed();
        let profile = GymProfile {
            gym_name: "Alpha Fitness Zone".to_string(),
            upi_id: "alpha@upi".to_string(),
            ..GymProfile::default()
        };
        save_profile(&mut data, profile.clone());
        assert_eq!(data.profile, profile);
    }
}
