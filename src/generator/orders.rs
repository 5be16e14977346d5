//! Order headers and their line items.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;

use crate::config::GenerationConfig;
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderItem, OrderStatus};
use crate::domain::product::Product;
use crate::generator::catalog::months_before;
use crate::generator::customers::PostalAddress;
use crate::generator::random_date_between;

/// Status weights per thousand orders, indexed like `OrderStatus::ALL`.
const STATUS_WEIGHTS: [u32; 5] = [16, 16, 336, 616, 16];

const MAX_QUANTITY: i32 = 5;

/// Orders are placed at most this many months before `as_of`.
const ORDER_WINDOW_MONTHS: u32 = 12;

/// Orders plus the items they own, produced together so totals always match.
#[derive(Debug, Default)]
pub struct GeneratedOrders {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
}

/// Build `config.orders` orders with their line items.
///
/// The total of each order is the sum of its item subtotals; it is set here
/// and never recomputed afterwards.
pub fn generate_orders<R: Rng>(
    rng: &mut R,
    config: &GenerationConfig,
    customers: &[Customer],
    products: &[Product],
) -> GeneratedOrders {
    let mut generated = GeneratedOrders::default();
    if customers.is_empty() || products.is_empty() {
        return generated;
    }

    let window_start = months_before(config.as_of, ORDER_WINDOW_MONTHS);
    let statuses = WeightedIndex::new(STATUS_WEIGHTS).ok();
    let max_items = config.max_order_items.min(products.len());
    let min_items = config.min_order_items.min(max_items);
    let mut next_item_id = 1;

    for order_id in 1..=config.orders as i32 {
        let Some(customer) = customers.choose(rng) else {
            break;
        };

        // never before the customer existed
        let placed_from = window_start.max(customer.registration_date);
        let order_date = random_date_between(rng, placed_from, config.as_of);

        let status = statuses
            .as_ref()
            .map(|weights| OrderStatus::ALL[weights.sample(rng)])
            .unwrap_or(OrderStatus::Pending);

        let shipping = PostalAddress::fake(rng);

        let item_count = rng.gen_range(min_items..=max_items);
        let mut total_cents = 0;
        for product in products.choose_multiple(rng, item_count) {
            let quantity = rng.gen_range(1..=MAX_QUANTITY);
            let item = OrderItem::new(
                next_item_id,
                order_id,
                product.id,
                quantity,
                product.price_cents,
            );
            total_cents += item.subtotal_cents;
            generated.items.push(item);
            next_item_id += 1;
        }

        generated.orders.push(Order {
            id: order_id,
            customer_id: customer.id,
            order_date,
            status,
            shipping_address: shipping.street,
            shipping_city: shipping.city,
            shipping_state: shipping.state,
            shipping_zip: shipping.zip,
            total_cents,
        });
    }

    generated
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generator::catalog::{generate_categories, generate_products};
    use crate::generator::customers::generate_customers;

    fn generate(
        config: &GenerationConfig,
        seed: u64,
    ) -> (Vec<Customer>, Vec<Product>, GeneratedOrders) {
        let mut rng = StdRng::seed_from_u64(seed);
        let categories = generate_categories(config);
        let products = generate_products(&mut rng, config, &categories);
        let customers = generate_customers(&mut rng, config);
        let orders = generate_orders(&mut rng, config, &customers, &products);
        (customers, products, orders)
    }

    #[test]
    fn totals_equal_item_subtotals() {
        let config = GenerationConfig::default();
        let (_, products, generated) = generate(&config, 42);

        let prices: HashMap<i32, i64> = products.iter().map(|p| (p.id, p.price_cents)).collect();
        let mut sums: HashMap<i32, i64> = HashMap::new();
        for item in &generated.items {
            assert!((1..=MAX_QUANTITY).contains(&item.quantity));
            assert_eq!(item.unit_price_cents, prices[&item.product_id]);
            assert_eq!(item.subtotal_cents, i64::from(item.quantity) * item.unit_price_cents);
            *sums.entry(item.order_id).or_default() += item.subtotal_cents;
        }

        assert_eq!(generated.orders.len(), 1000);
        for order in &generated.orders {
            assert_eq!(order.total_cents, sums[&order.id]);
        }
    }

    #[test]
    fn item_counts_stay_within_bounds() {
        let config = GenerationConfig {
            min_order_items: 2,
            max_order_items: 3,
            orders: 200,
            ..GenerationConfig::default()
        };
        let (_, _, generated) = generate(&config, 9);

        let mut counts: HashMap<i32, usize> = HashMap::new();
        for item in &generated.items {
            *counts.entry(item.order_id).or_default() += 1;
        }
        assert_eq!(counts.len(), 200);
        assert!(counts.values().all(|count| (2..=3).contains(count)));
    }

    #[test]
    fn orders_follow_customer_registration() {
        let config = GenerationConfig::default();
        let (customers, _, generated) = generate(&config, 5);

        let registered: HashMap<i32, _> = customers
            .iter()
            .map(|c| (c.id, c.registration_date))
            .collect();
        for order in &generated.orders {
            assert!(order.order_date >= registered[&order.customer_id]);
            assert!(order.order_date <= config.as_of);
        }
    }

    #[test]
    fn item_count_is_clamped_to_catalogue_size() {
        let config = GenerationConfig {
            products: 2,
            min_order_items: 4,
            max_order_items: 5,
            orders: 10,
            ..GenerationConfig::default()
        };
        let (_, _, generated) = generate(&config, 1);

        assert_eq!(generated.items.len(), 20);
    }

    #[test]
    fn most_orders_are_delivered() {
        let config = GenerationConfig::default();
        let (_, _, generated) = generate(&config, 11);

        let delivered = generated
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .count();
        assert!(delivered > 450, "delivered = {delivered}");
    }
}
