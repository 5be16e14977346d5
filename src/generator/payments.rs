//! Payment attempts for already materialized orders.

use chrono::Duration;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;

use crate::config::PaymentPolicy;
use crate::domain::order::Order;
use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};

/// Single-attempt status weights, indexed like `PaymentStatus::ALL`.
const STATUS_WEIGHTS: [u32; 4] = [3, 1, 1, 1];

/// Each attempt happens at most this many days after the previous one.
const MAX_SETTLEMENT_DAYS: i64 = 3;

/// Build the payment attempts of every order according to `policy`.
///
/// Every attempt charges the full order total, so a completed payment always
/// reconciles with its order.
pub fn generate_payments<R: Rng>(
    rng: &mut R,
    policy: &PaymentPolicy,
    orders: &[Order],
) -> Vec<Payment> {
    let statuses = WeightedIndex::new(STATUS_WEIGHTS).ok();
    let max_attempts = policy.max_attempts.max(1);
    let mut payments = Vec::with_capacity(orders.len());
    let mut next_id = 1;

    for order in orders {
        let attempts = if max_attempts > 1 && rng.gen_bool(policy.retry_rate) {
            rng.gen_range(2..=max_attempts)
        } else {
            1
        };

        let mut payment_date = order.order_date;
        for attempt in 1..=attempts {
            payment_date = payment_date + Duration::days(rng.gen_range(0..=MAX_SETTLEMENT_DAYS));
            let payment_method = PaymentMethod::ALL
                .choose(rng)
                .copied()
                .unwrap_or(PaymentMethod::CreditCard);

            let payment_status = if attempts == 1 {
                statuses
                    .as_ref()
                    .map(|weights| PaymentStatus::ALL[weights.sample(rng)])
                    .unwrap_or(PaymentStatus::Completed)
            } else if attempt == attempts {
                PaymentStatus::Completed
            } else {
                PaymentStatus::Failed
            };

            payments.push(Payment {
                id: next_id,
                order_id: order.id,
                payment_method,
                payment_date,
                amount_cents: order.total_cents,
                payment_status,
            });
            next_id += 1;
        }
    }

    payments
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::order::OrderStatus;

    fn orders(count: i32) -> Vec<Order> {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        (1..=count)
            .map(|id| Order {
                id,
                customer_id: 1,
                order_date: date,
                status: OrderStatus::Delivered,
                shipping_address: "1 Main Street".to_string(),
                shipping_city: "Springfield".to_string(),
                shipping_state: "IL".to_string(),
                shipping_zip: "62701".to_string(),
                total_cents: 1000 + i64::from(id),
            })
            .collect()
    }

    #[test]
    fn single_attempt_policy_pays_each_order_once() {
        let policy = PaymentPolicy {
            retry_rate: 0.0,
            ..PaymentPolicy::default()
        };
        let orders = orders(50);
        let mut rng = StdRng::seed_from_u64(42);

        let payments = generate_payments(&mut rng, &policy, &orders);

        assert_eq!(payments.len(), 50);
        for (payment, order) in payments.iter().zip(&orders) {
            assert_eq!(payment.order_id, order.id);
            assert_eq!(payment.amount_cents, order.total_cents);
            assert!(payment.payment_date >= order.order_date);
            assert!(payment.payment_date <= order.order_date + Duration::days(3));
        }
    }

    #[test]
    fn retries_end_with_a_completed_attempt() {
        let policy = PaymentPolicy {
            retry_rate: 1.0,
            max_attempts: 3,
            ..PaymentPolicy::default()
        };
        let orders = orders(20);
        let mut rng = StdRng::seed_from_u64(8);

        let payments = generate_payments(&mut rng, &policy, &orders);

        let mut by_order: HashMap<i32, Vec<&Payment>> = HashMap::new();
        for payment in &payments {
            by_order.entry(payment.order_id).or_default().push(payment);
        }
        assert_eq!(by_order.len(), 20);
        for attempts in by_order.values() {
            assert!((2..=3).contains(&attempts.len()));
            let (last, earlier) = attempts.split_last().unwrap();
            assert_eq!(last.payment_status, PaymentStatus::Completed);
            assert!(earlier.iter().all(|p| p.payment_status == PaymentStatus::Failed));
            assert!(attempts.windows(2).all(|w| w[0].payment_date <= w[1].payment_date));
        }
    }

    #[test]
    fn payment_ids_are_sequential() {
        let policy = PaymentPolicy {
            retry_rate: 0.5,
            ..PaymentPolicy::default()
        };
        let mut rng = StdRng::seed_from_u64(2);

        let payments = generate_payments(&mut rng, &policy, &orders(30));

        let ids: Vec<i32> = payments.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=payments.len() as i32).collect::<Vec<_>>());
    }
}
