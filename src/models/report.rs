use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};

use crate::domain::report::{
    CategoryRevenue as DomainCategoryRevenue, CustomerSpending as DomainCustomerSpending,
    MonthlyRevenue as DomainMonthlyRevenue, ProductSales as DomainProductSales,
    SpendingSummary as DomainSpendingSummary,
};

#[derive(Debug, QueryableByName)]
pub struct CustomerSpending {
    #[diesel(sql_type = Integer)]
    pub customer_id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Text)]
    pub email: String,
    #[diesel(sql_type = BigInt)]
    pub total_orders: i64,
    #[diesel(sql_type = BigInt)]
    pub total_spent_cents: i64,
}

#[derive(Debug, QueryableByName)]
pub struct SpendingSummary {
    #[diesel(sql_type = BigInt)]
    pub total_customers: i64,
    #[diesel(sql_type = BigInt)]
    pub customers_with_orders: i64,
    #[diesel(sql_type = BigInt)]
    pub total_orders: i64,
    #[diesel(sql_type = BigInt)]
    pub total_revenue_cents: i64,
}

#[derive(Debug, QueryableByName)]
pub struct ProductSales {
    #[diesel(sql_type = Integer)]
    pub product_id: i32,
    #[diesel(sql_type = Text)]
    pub product_name: String,
    #[diesel(sql_type = Text)]
    pub category_name: String,
    #[diesel(sql_type = BigInt)]
    pub quantity_sold: i64,
    #[diesel(sql_type = BigInt)]
    pub revenue_cents: i64,
}

#[derive(Debug, QueryableByName)]
pub struct CategoryRevenue {
    #[diesel(sql_type = Integer)]
    pub category_id: i32,
    #[diesel(sql_type = Text)]
    pub category_name: String,
    #[diesel(sql_type = BigInt)]
    pub orders: i64,
    #[diesel(sql_type = BigInt)]
    pub items_sold: i64,
    #[diesel(sql_type = BigInt)]
    pub revenue_cents: i64,
}

#[derive(Debug, QueryableByName)]
pub struct MonthlyRevenue {
    #[diesel(sql_type = Text)]
    pub month: String,
    #[diesel(sql_type = BigInt)]
    pub orders: i64,
    #[diesel(sql_type = BigInt)]
    pub revenue_cents: i64,
}

#[derive(Debug, QueryableByName)]
pub struct RowCount {
    #[diesel(sql_type = BigInt)]
    pub row_count: i64,
}

impl From<CustomerSpending> for DomainCustomerSpending {
    fn from(value: CustomerSpending) -> Self {
        Self {
            customer_id: value.customer_id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            total_orders: value.total_orders,
            total_spent_cents: value.total_spent_cents,
        }
    }
}

impl From<SpendingSummary> for DomainSpendingSummary {
    fn from(value: SpendingSummary) -> Self {
        let average_order_value_cents = if value.total_orders > 0 {
            value.total_revenue_cents / value.total_orders
        } else {
            0
        };

        Self {
            total_customers: value.total_customers,
            customers_with_orders: value.customers_with_orders,
            total_orders: value.total_orders,
            total_revenue_cents: value.total_revenue_cents,
            average_order_value_cents,
        }
    }
}

impl From<ProductSales> for DomainProductSales {
    fn from(value: ProductSales) -> Self {
        Self {
            product_id: value.product_id,
            product_name: value.product_name,
            category_name: value.category_name,
            quantity_sold: value.quantity_sold,
            revenue_cents: value.revenue_cents,
        }
    }
}

impl From<CategoryRevenue> for DomainCategoryRevenue {
    fn from(value: CategoryRevenue) -> Self {
        Self {
            category_id: value.category_id,
            category_name: value.category_name,
            orders: value.orders,
            items_sold: value.items_sold,
            revenue_cents: value.revenue_cents,
        }
    }
}

impl From<MonthlyRevenue> for DomainMonthlyRevenue {
    fn from(value: MonthlyRevenue) -> Self {
        Self {
            month: value.month,
            orders: value.orders,
            revenue_cents: value.revenue_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_average_guards_against_no_orders() {
        let empty = SpendingSummary {
            total_customers: 4,
            customers_with_orders: 0,
            total_orders: 0,
            total_revenue_cents: 0,
        };

        let summary: DomainSpendingSummary = empty.into();

        assert_eq!(summary.average_order_value_cents, 0);
    }

    #[test]
    fn summary_average_rounds_down() {
        let row = SpendingSummary {
            total_customers: 2,
            customers_with_orders: 2,
            total_orders: 3,
            total_revenue_cents: 1000,
        };

        let summary: DomainSpendingSummary = row.into();

        assert_eq!(summary.average_order_value_cents, 333);
    }
}
