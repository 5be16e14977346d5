//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use ecom_synth::db::{DbPool, rebuild_store};
use ecom_synth::domain::Dataset;
use ecom_synth::domain::category::Category;
use ecom_synth::domain::customer::Customer;
use ecom_synth::domain::order::{Order, OrderItem, OrderStatus};
use ecom_synth::domain::payment::{Payment, PaymentMethod, PaymentStatus};
use ecom_synth::domain::product::Product;
use ecom_synth::repository::DieselRepository;

/// Temporary store with the schema applied, removed with its directory on drop.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let pool = rebuild_store(&path).expect("Failed to create SQLite store.");
        TestDb { pool, path, dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn customer(id: i32, first_name: &str, last_name: &str) -> Customer {
    Customer {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: "555-0100".to_string(),
        address: format!("{id} Main Street"),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        country: "USA".to_string(),
        registration_date: date(2024, 1, 1),
    }
}

pub fn product(id: i32, name: &str, price_cents: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("High-quality {} perfect for your needs.", name.to_lowercase()),
        price_cents,
        category_id: 1,
        stock_quantity: 10,
        created_date: date(2024, 1, 1),
    }
}

pub fn order(id: i32, customer_id: i32, order_date: NaiveDate, total_cents: i64) -> Order {
    Order {
        id,
        customer_id,
        order_date,
        status: OrderStatus::Delivered,
        shipping_address: "1 Main Street".to_string(),
        shipping_city: "Springfield".to_string(),
        shipping_state: "IL".to_string(),
        shipping_zip: "62701".to_string(),
        total_cents,
    }
}

pub fn payment(id: i32, order: &Order, status: PaymentStatus) -> Payment {
    Payment {
        id,
        order_id: order.id,
        payment_method: PaymentMethod::CreditCard,
        payment_date: order.order_date,
        amount_cents: order.total_cents,
        payment_status: status,
    }
}

/// Two customers: Ada has three orders of 10.00, 20.00 and 5.00, each paid in
/// full; Alan has one order of 7.50 whose only payment failed. Linus never ordered.
pub fn spending_dataset() -> Dataset {
    let orders = vec![
        order(1, 1, date(2025, 1, 10), 1000),
        order(2, 1, date(2025, 2, 10), 2000),
        order(3, 1, date(2025, 2, 20), 500),
        order(4, 2, date(2025, 3, 5), 750),
    ];
    let order_items = vec![
        OrderItem::new(1, 1, 1, 1, 1000),
        OrderItem::new(2, 2, 2, 4, 500),
        OrderItem::new(3, 3, 2, 1, 500),
        OrderItem::new(4, 4, 3, 3, 250),
    ];
    let payments = vec![
        payment(1, &orders[0], PaymentStatus::Completed),
        payment(2, &orders[1], PaymentStatus::Completed),
        payment(3, &orders[2], PaymentStatus::Completed),
        payment(4, &orders[3], PaymentStatus::Failed),
    ];

    Dataset {
        categories: vec![Category::new(1, "Books")],
        products: vec![
            product(1, "Atlas", 1000),
            product(2, "Notebook", 500),
            product(3, "Pencil", 250),
        ],
        customers: vec![
            customer(1, "Ada", "Lovelace"),
            customer(2, "Alan", "Turing"),
            customer(3, "Linus", "Pauling"),
        ],
        orders,
        order_items,
        payments,
    }
}
