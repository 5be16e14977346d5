//! Whole-dataset invariant checks.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use validator::ValidateEmail;

use crate::domain::Dataset;
use crate::domain::payment::PaymentStatus;

/// A dataset invariant that does not hold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("{table} row {id} appears more than once")]
    DuplicateId { table: &'static str, id: i32 },
    #[error("{table} row {row_id} references missing {column} {value}")]
    DanglingReference {
        table: &'static str,
        row_id: i32,
        column: &'static str,
        value: i32,
    },
    #[error("customer {customer_id} has invalid email `{email}`")]
    InvalidEmail { customer_id: i32, email: String },
    #[error("customer {customer_id} reuses email `{email}`")]
    DuplicateEmail { customer_id: i32, email: String },
    #[error("product {product_id} has a negative price or stock")]
    NegativeProductValue { product_id: i32 },
    #[error("order item {item_id} has quantity below one")]
    NonPositiveQuantity { item_id: i32 },
    #[error("order item {item_id} subtotal is not quantity times unit price")]
    SubtotalMismatch { item_id: i32 },
    #[error("order {order_id} has no items")]
    EmptyOrder { order_id: i32 },
    #[error("order {order_id} total {total_cents} differs from item sum {items_cents}")]
    TotalMismatch {
        order_id: i32,
        total_cents: i64,
        items_cents: i64,
    },
    #[error("completed payment {payment_id} does not match its order total")]
    UnreconciledPayment { payment_id: i32 },
    #[error("payment {payment_id} is dated before its order")]
    PaymentBeforeOrder { payment_id: i32 },
}

/// Fail on the first invariant violation of `dataset`.
pub fn verify_dataset(dataset: &Dataset) -> Result<(), IntegrityError> {
    match find_violations(dataset).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Collect every invariant violation of `dataset`.
pub fn find_violations(dataset: &Dataset) -> Vec<IntegrityError> {
    let mut violations = Vec::new();

    let category_ids = unique_ids(
        "categories",
        dataset.categories.iter().map(|c| c.id),
        &mut violations,
    );
    let product_ids = unique_ids(
        "products",
        dataset.products.iter().map(|p| p.id),
        &mut violations,
    );
    let customer_ids = unique_ids(
        "customers",
        dataset.customers.iter().map(|c| c.id),
        &mut violations,
    );
    let order_ids = unique_ids(
        "orders",
        dataset.orders.iter().map(|o| o.id),
        &mut violations,
    );
    unique_ids(
        "order_items",
        dataset.order_items.iter().map(|i| i.id),
        &mut violations,
    );
    unique_ids(
        "payments",
        dataset.payments.iter().map(|p| p.id),
        &mut violations,
    );

    for product in &dataset.products {
        if !category_ids.contains(&product.category_id) {
            violations.push(IntegrityError::DanglingReference {
                table: "products",
                row_id: product.id,
                column: "category_id",
                value: product.category_id,
            });
        }
        if product.price_cents < 0 || product.stock_quantity < 0 {
            violations.push(IntegrityError::NegativeProductValue {
                product_id: product.id,
            });
        }
    }

    let mut emails = HashSet::new();
    for customer in &dataset.customers {
        if !customer.email.validate_email() {
            violations.push(IntegrityError::InvalidEmail {
                customer_id: customer.id,
                email: customer.email.clone(),
            });
        } else if !emails.insert(customer.email.as_str()) {
            violations.push(IntegrityError::DuplicateEmail {
                customer_id: customer.id,
                email: customer.email.clone(),
            });
        }
    }

    let mut item_sums: HashMap<i32, i64> = HashMap::new();
    for item in &dataset.order_items {
        if !order_ids.contains(&item.order_id) {
            violations.push(IntegrityError::DanglingReference {
                table: "order_items",
                row_id: item.id,
                column: "order_id",
                value: item.order_id,
            });
        }
        if !product_ids.contains(&item.product_id) {
            violations.push(IntegrityError::DanglingReference {
                table: "order_items",
                row_id: item.id,
                column: "product_id",
                value: item.product_id,
            });
        }
        if item.quantity < 1 {
            violations.push(IntegrityError::NonPositiveQuantity { item_id: item.id });
        }
        if item.subtotal_cents != i64::from(item.quantity) * item.unit_price_cents {
            violations.push(IntegrityError::SubtotalMismatch { item_id: item.id });
        }
        *item_sums.entry(item.order_id).or_default() += item.subtotal_cents;
    }

    for order in &dataset.orders {
        if !customer_ids.contains(&order.customer_id) {
            violations.push(IntegrityError::DanglingReference {
                table: "orders",
                row_id: order.id,
                column: "customer_id",
                value: order.customer_id,
            });
        }
        match item_sums.get(&order.id) {
            None => violations.push(IntegrityError::EmptyOrder { order_id: order.id }),
            Some(&items_cents) if items_cents != order.total_cents => {
                violations.push(IntegrityError::TotalMismatch {
                    order_id: order.id,
                    total_cents: order.total_cents,
                    items_cents,
                })
            }
            Some(_) => {}
        }
    }

    let orders: HashMap<i32, _> = dataset.orders.iter().map(|o| (o.id, o)).collect();
    for payment in &dataset.payments {
        let Some(order) = orders.get(&payment.order_id) else {
            violations.push(IntegrityError::DanglingReference {
                table: "payments",
                row_id: payment.id,
                column: "order_id",
                value: payment.order_id,
            });
            continue;
        };
        if payment.payment_status == PaymentStatus::Completed
            && payment.amount_cents != order.total_cents
        {
            violations.push(IntegrityError::UnreconciledPayment {
                payment_id: payment.id,
            });
        }
        if payment.payment_date < order.order_date {
            violations.push(IntegrityError::PaymentBeforeOrder {
                payment_id: payment.id,
            });
        }
    }

    violations
}

fn unique_ids(
    table: &'static str,
    ids: impl Iterator<Item = i32>,
    violations: &mut Vec<IntegrityError>,
) -> HashSet<i32> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            violations.push(IntegrityError::DuplicateId { table, id });
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::domain::category::Category;
    use crate::domain::customer::Customer;
    use crate::domain::order::{Order, OrderItem, OrderStatus};
    use crate::domain::payment::{Payment, PaymentMethod};
    use crate::domain::product::Product;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn small_dataset() -> Dataset {
        Dataset {
            categories: vec![Category::new(1, "Books")],
            products: vec![Product {
                id: 1,
                name: "Novel".to_string(),
                description: "A novel".to_string(),
                price_cents: 1250,
                category_id: 1,
                stock_quantity: 4,
                created_date: date(),
            }],
            customers: vec![Customer {
                id: 1,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada.lovelace@example.com".to_string(),
                phone: "555-0100".to_string(),
                address: "12 Analytical Way".to_string(),
                city: "London".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
                country: "USA".to_string(),
                registration_date: date(),
            }],
            orders: vec![Order {
                id: 1,
                customer_id: 1,
                order_date: date(),
                status: OrderStatus::Delivered,
                shipping_address: "12 Analytical Way".to_string(),
                shipping_city: "London".to_string(),
                shipping_state: "NY".to_string(),
                shipping_zip: "10001".to_string(),
                total_cents: 2500,
            }],
            order_items: vec![OrderItem::new(1, 1, 1, 2, 1250)],
            payments: vec![Payment {
                id: 1,
                order_id: 1,
                payment_method: PaymentMethod::PayPal,
                payment_date: date() + Duration::days(1),
                amount_cents: 2500,
                payment_status: PaymentStatus::Completed,
            }],
        }
    }

    #[test]
    fn consistent_dataset_passes() {
        assert_eq!(verify_dataset(&small_dataset()), Ok(()));
    }

    #[test]
    fn detects_dangling_product_reference() {
        let mut dataset = small_dataset();
        dataset.order_items[0].product_id = 99;

        assert_eq!(
            verify_dataset(&dataset),
            Err(IntegrityError::DanglingReference {
                table: "order_items",
                row_id: 1,
                column: "product_id",
                value: 99,
            })
        );
    }

    #[test]
    fn detects_total_drift() {
        let mut dataset = small_dataset();
        dataset.orders[0].total_cents = 2400;

        let violations = find_violations(&dataset);
        assert!(violations.contains(&IntegrityError::TotalMismatch {
            order_id: 1,
            total_cents: 2400,
            items_cents: 2500,
        }));
        assert!(violations.contains(&IntegrityError::UnreconciledPayment { payment_id: 1 }));
    }

    #[test]
    fn detects_early_payment_and_bad_email() {
        let mut dataset = small_dataset();
        dataset.payments[0].payment_date = date() - Duration::days(2);
        dataset.customers[0].email = "not-an-email".to_string();

        let violations = find_violations(&dataset);
        assert!(violations.contains(&IntegrityError::PaymentBeforeOrder { payment_id: 1 }));
        assert!(violations.contains(&IntegrityError::InvalidEmail {
            customer_id: 1,
            email: "not-an-email".to_string(),
        }));
    }

    #[test]
    fn detects_order_without_items() {
        let mut dataset = small_dataset();
        dataset.order_items.clear();

        assert_eq!(
            verify_dataset(&dataset),
            Err(IntegrityError::EmptyOrder { order_id: 1 })
        );
    }
}
