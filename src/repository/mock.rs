use mockall::mock;

use super::{DatasetWriter, ReportReader};
use crate::domain::{
    category::Category,
    customer::Customer,
    order::{Order, OrderItem},
    payment::Payment,
    product::Product,
    report::{
        CategoryRevenue, CustomerSpending, MonthlyRevenue, ProductSales, SpendingSummary,
        TableCount,
    },
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub DatasetWriter {}

    impl DatasetWriter for DatasetWriter {
        fn insert_categories(&self, categories: &[Category]) -> RepositoryResult<usize>;
        fn insert_products(&self, products: &[Product]) -> RepositoryResult<usize>;
        fn insert_customers(&self, customers: &[Customer]) -> RepositoryResult<usize>;
        fn insert_orders(&self, orders: &[Order]) -> RepositoryResult<usize>;
        fn insert_order_items(&self, items: &[OrderItem]) -> RepositoryResult<usize>;
        fn insert_payments(&self, payments: &[Payment]) -> RepositoryResult<usize>;
        fn replace_payments(&self, payments: &[Payment]) -> RepositoryResult<usize>;
    }
}

mock! {
    pub ReportReader {}

    impl ReportReader for ReportReader {
        fn customer_spending(&self, limit: Option<usize>) -> RepositoryResult<Vec<CustomerSpending>>;
        fn spending_summary(&self) -> RepositoryResult<SpendingSummary>;
        fn top_products(&self, limit: usize) -> RepositoryResult<Vec<ProductSales>>;
        fn revenue_by_category(&self) -> RepositoryResult<Vec<CategoryRevenue>>;
        fn monthly_revenue(&self) -> RepositoryResult<Vec<MonthlyRevenue>>;
        fn top_customers_by_orders(&self, limit: usize) -> RepositoryResult<Vec<CustomerSpending>>;
        fn table_counts(&self) -> RepositoryResult<Vec<TableCount>>;
    }
}
