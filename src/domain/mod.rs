//! Plain records of the synthetic shop, shared by generators, CSV files and the store.

pub mod category;
pub mod customer;
pub mod money;
pub mod order;
pub mod payment;
pub mod product;
pub mod report;

use category::Category;
use customer::Customer;
use order::{Order, OrderItem};
use payment::Payment;
use product::Product;

/// Every record of one generated or loaded dataset.
///
/// `payments` may be empty: payments are produced by a separate phase and the
/// loader treats their file as optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}
