use crate::db::{DbConnection, DbPool};
use crate::domain::Dataset;
use crate::domain::category::Category;
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderItem};
use crate::domain::payment::Payment;
use crate::domain::product::Product;
use crate::domain::report::{
    CategoryRevenue, CustomerSpending, MonthlyRevenue, ProductSales, SpendingSummary, TableCount,
};
use errors::RepositoryResult;

pub mod dataset;
pub mod errors;
pub mod report;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Bulk inserts into a freshly rebuilt store.
///
/// Each call loads one table inside its own transaction and returns the number
/// of rows inserted. A rejected row rolls the whole table back and surfaces as
/// [`errors::RepositoryError::ConstraintViolation`].
pub trait DatasetWriter {
    fn insert_categories(&self, categories: &[Category]) -> RepositoryResult<usize>;
    fn insert_products(&self, products: &[Product]) -> RepositoryResult<usize>;
    fn insert_customers(&self, customers: &[Customer]) -> RepositoryResult<usize>;
    fn insert_orders(&self, orders: &[Order]) -> RepositoryResult<usize>;
    fn insert_order_items(&self, items: &[OrderItem]) -> RepositoryResult<usize>;
    fn insert_payments(&self, payments: &[Payment]) -> RepositoryResult<usize>;
    /// Delete every stored payment and insert `payments` in the same transaction.
    fn replace_payments(&self, payments: &[Payment]) -> RepositoryResult<usize>;
}

/// Reads whole tables back into domain records, ordered by id.
pub trait DatasetReader {
    fn read_dataset(&self) -> RepositoryResult<Dataset>;
}

/// Read-only aggregate queries over a loaded store.
pub trait ReportReader {
    /// Customers ordered by completed spend, then order count; `None` returns all of them.
    fn customer_spending(&self, limit: Option<usize>) -> RepositoryResult<Vec<CustomerSpending>>;
    fn spending_summary(&self) -> RepositoryResult<SpendingSummary>;
    fn top_products(&self, limit: usize) -> RepositoryResult<Vec<ProductSales>>;
    fn revenue_by_category(&self) -> RepositoryResult<Vec<CategoryRevenue>>;
    fn monthly_revenue(&self) -> RepositoryResult<Vec<MonthlyRevenue>>;
    fn top_customers_by_orders(&self, limit: usize) -> RepositoryResult<Vec<CustomerSpending>>;
    fn table_counts(&self) -> RepositoryResult<Vec<TableCount>>;
}
