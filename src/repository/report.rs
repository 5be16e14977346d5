use diesel::prelude::*;
use diesel::sql_types::BigInt;

use crate::{
    db::TABLES,
    domain::report::{
        CategoryRevenue, CustomerSpending, MonthlyRevenue, ProductSales, SpendingSummary,
        TableCount,
    },
    models::report::{
        CategoryRevenue as DbCategoryRevenue, CustomerSpending as DbCustomerSpending,
        MonthlyRevenue as DbMonthlyRevenue, ProductSales as DbProductSales, RowCount,
        SpendingSummary as DbSpendingSummary,
    },
    repository::errors::RepositoryResult,
    repository::{DieselRepository, ReportReader},
};

// Completed payments only. Customers without orders keep zero rows.
const CUSTOMER_SPENDING: &str = "
    SELECT c.id AS customer_id, c.first_name, c.last_name, c.email,
           COUNT(DISTINCT o.id) AS total_orders,
           COALESCE(SUM(p.amount_cents), 0) AS total_spent_cents
    FROM customers c
    LEFT JOIN orders o ON o.customer_id = c.id
    LEFT JOIN payments p ON p.order_id = o.id AND p.payment_status = 'Completed'
    GROUP BY c.id";

const SPENDING_SUMMARY: &str = "
    SELECT (SELECT COUNT(*) FROM customers) AS total_customers,
           (SELECT COUNT(DISTINCT customer_id) FROM orders) AS customers_with_orders,
           (SELECT COUNT(*) FROM orders) AS total_orders,
           (SELECT COALESCE(SUM(amount_cents), 0) FROM payments
             WHERE payment_status = 'Completed') AS total_revenue_cents";

const TOP_PRODUCTS: &str = "
    SELECT p.id AS product_id, p.name AS product_name, c.name AS category_name,
           SUM(oi.quantity) AS quantity_sold,
           SUM(oi.subtotal_cents) AS revenue_cents
    FROM order_items oi
    JOIN orders o ON o.id = oi.order_id
    JOIN products p ON p.id = oi.product_id
    JOIN categories c ON c.id = p.category_id
    WHERE o.status <> 'Cancelled'
    GROUP BY p.id
    ORDER BY quantity_sold DESC, revenue_cents DESC, p.id ASC
    LIMIT ?";

const REVENUE_BY_CATEGORY: &str = "
    WITH sold AS (
        SELECT oi.order_id, oi.product_id, oi.quantity, oi.subtotal_cents
        FROM order_items oi
        JOIN orders o ON o.id = oi.order_id
        WHERE o.status <> 'Cancelled'
    )
    SELECT c.id AS category_id, c.name AS category_name,
           COUNT(DISTINCT s.order_id) AS orders,
           COALESCE(SUM(s.quantity), 0) AS items_sold,
           COALESCE(SUM(s.subtotal_cents), 0) AS revenue_cents
    FROM categories c
    LEFT JOIN products p ON p.category_id = c.id
    LEFT JOIN sold s ON s.product_id = p.id
    GROUP BY c.id
    ORDER BY revenue_cents DESC, c.id ASC";

const MONTHLY_REVENUE: &str = "
    SELECT strftime('%Y-%m', order_date) AS month,
           COUNT(*) AS orders,
           SUM(total_cents) AS revenue_cents
    FROM orders
    WHERE status <> 'Cancelled'
    GROUP BY month
    ORDER BY month ASC";

/// SQLite reads a negative `LIMIT` as no limit.
fn sql_limit(limit: Option<usize>) -> i64 {
    limit
        .and_then(|limit| i64::try_from(limit).ok())
        .unwrap_or(-1)
}

impl DieselRepository {
    fn ranked_customers(
        &self,
        order_by: &str,
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<CustomerSpending>> {
        let mut conn = self.conn()?;

        let rows = diesel::sql_query(format!("{CUSTOMER_SPENDING} ORDER BY {order_by} LIMIT ?"))
            .bind::<BigInt, _>(sql_limit(limit))
            .load::<DbCustomerSpending>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ReportReader for DieselRepository {
    fn customer_spending(&self, limit: Option<usize>) -> RepositoryResult<Vec<CustomerSpending>> {
        self.ranked_customers(
            "total_spent_cents DESC, total_orders DESC, customer_id ASC",
            limit,
        )
    }

    fn spending_summary(&self) -> RepositoryResult<SpendingSummary> {
        let mut conn = self.conn()?;

        let row = diesel::sql_query(SPENDING_SUMMARY)
            .get_result::<DbSpendingSummary>(&mut conn)?;
        Ok(row.into())
    }

    fn top_products(&self, limit: usize) -> RepositoryResult<Vec<ProductSales>> {
        let mut conn = self.conn()?;

        let rows = diesel::sql_query(TOP_PRODUCTS)
            .bind::<BigInt, _>(sql_limit(Some(limit)))
            .load::<DbProductSales>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn revenue_by_category(&self) -> RepositoryResult<Vec<CategoryRevenue>> {
        let mut conn = self.conn()?;

        let rows = diesel::sql_query(REVENUE_BY_CATEGORY)
            .load::<DbCategoryRevenue>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn monthly_revenue(&self) -> RepositoryResult<Vec<MonthlyRevenue>> {
        let mut conn = self.conn()?;

        let rows = diesel::sql_query(MONTHLY_REVENUE)
            .load::<DbMonthlyRevenue>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn top_customers_by_orders(&self, limit: usize) -> RepositoryResult<Vec<CustomerSpending>> {
        self.ranked_customers(
            "total_orders DESC, total_spent_cents DESC, customer_id ASC",
            Some(limit),
        )
    }

    fn table_counts(&self) -> RepositoryResult<Vec<TableCount>> {
        let mut conn = self.conn()?;

        TABLES
            .iter()
            .map(|table| -> RepositoryResult<TableCount> {
                let count = diesel::sql_query(format!("SELECT COUNT(*) AS row_count FROM {table}"))
                    .get_result::<RowCount>(&mut conn)?;
                Ok(TableCount {
                    table: table.to_string(),
                    rows: count.row_count,
                })
            })
            .collect()
    }
}
