use clap::ValueEnum;
use comfy_table::{CellAlignment, Table, presets::UTF8_FULL};
use serde::Serialize;

use crate::domain::money::Cents;
use crate::domain::report::{
    CategoryRevenue, CustomerSpending, MonthlyRevenue, ProductSales, SpendingSummary, TableCount,
};
use crate::repository::ReportReader;
use crate::services::ServiceResult;

pub const DEFAULT_TOP_PRODUCTS: usize = 10;
pub const DEFAULT_TOP_CUSTOMERS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Orders and completed spend per customer.
    #[default]
    CustomerSpending,
    /// Store-wide customer, order and revenue totals.
    Summary,
    /// Best selling products by quantity.
    TopProducts,
    /// Item revenue per category.
    CategoryRevenue,
    /// Order revenue per calendar month.
    MonthlyRevenue,
    /// Customers with the most orders.
    TopCustomers,
    /// Row count of every table.
    Counts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Result rows of one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    CustomerSpending(Vec<CustomerSpending>),
    Summary(SpendingSummary),
    TopProducts(Vec<ProductSales>),
    CategoryRevenue(Vec<CategoryRevenue>),
    MonthlyRevenue(Vec<MonthlyRevenue>),
    TopCustomers(Vec<CustomerSpending>),
    Counts(Vec<TableCount>),
}

/// Run the `kind` report. `limit` caps ranked reports; customer spending is
/// unbounded without it.
pub fn run_report<R>(repo: &R, kind: ReportKind, limit: Option<usize>) -> ServiceResult<Report>
where
    R: ReportReader + ?Sized,
{
    let report = match kind {
        ReportKind::CustomerSpending => Report::CustomerSpending(repo.customer_spending(limit)?),
        ReportKind::Summary => Report::Summary(repo.spending_summary()?),
        ReportKind::TopProducts => {
            Report::TopProducts(repo.top_products(limit.unwrap_or(DEFAULT_TOP_PRODUCTS))?)
        }
        ReportKind::CategoryRevenue => Report::CategoryRevenue(repo.revenue_by_category()?),
        ReportKind::MonthlyRevenue => Report::MonthlyRevenue(repo.monthly_revenue()?),
        ReportKind::TopCustomers => Report::TopCustomers(
            repo.top_customers_by_orders(limit.unwrap_or(DEFAULT_TOP_CUSTOMERS))?,
        ),
        ReportKind::Counts => Report::Counts(repo.table_counts()?),
    };
    Ok(report)
}

pub fn render_report(report: &Report, format: ReportFormat) -> ServiceResult<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &Report) -> String {
    use CellAlignment::{Left, Right};

    match report {
        Report::CustomerSpending(rows) | Report::TopCustomers(rows) => table(
            &[
                ("Customer ID", Right),
                ("Customer Name", Left),
                ("Email", Left),
                ("Orders", Right),
                ("Total Spent", Right),
            ],
            rows.iter()
                .map(|row| {
                    vec![
                        row.customer_id.to_string(),
                        format!("{} {}", row.first_name, row.last_name),
                        row.email.clone(),
                        row.total_orders.to_string(),
                        Cents(row.total_spent_cents).to_string(),
                    ]
                })
                .collect(),
        ),
        Report::Summary(summary) => table(
            &[("Metric", Left), ("Value", Right)],
            vec![
                vec![
                    "Total Customers".to_string(),
                    summary.total_customers.to_string(),
                ],
                vec![
                    "Customers with Orders".to_string(),
                    summary.customers_with_orders.to_string(),
                ],
                vec!["Total Orders".to_string(), summary.total_orders.to_string()],
                vec![
                    "Total Revenue".to_string(),
                    Cents(summary.total_revenue_cents).to_string(),
                ],
                vec![
                    "Average Order Value".to_string(),
                    Cents(summary.average_order_value_cents).to_string(),
                ],
            ],
        ),
        Report::TopProducts(rows) => table(
            &[
                ("Product ID", Right),
                ("Product", Left),
                ("Category", Left),
                ("Sold", Right),
                ("Revenue", Right),
            ],
            rows.iter()
                .map(|row| {
                    vec![
                        row.product_id.to_string(),
                        row.product_name.clone(),
                        row.category_name.clone(),
                        row.quantity_sold.to_string(),
                        Cents(row.revenue_cents).to_string(),
                    ]
                })
                .collect(),
        ),
        Report::CategoryRevenue(rows) => table(
            &[
                ("Category ID", Right),
                ("Category", Left),
                ("Orders", Right),
                ("Items", Right),
                ("Revenue", Right),
            ],
            rows.iter()
                .map(|row| {
                    vec![
                        row.category_id.to_string(),
                        row.category_name.clone(),
                        row.orders.to_string(),
                        row.items_sold.to_string(),
                        Cents(row.revenue_cents).to_string(),
                    ]
                })
                .collect(),
        ),
        Report::MonthlyRevenue(rows) => table(
            &[("Month", Left), ("Orders", Right), ("Revenue", Right)],
            rows.iter()
                .map(|row| {
                    vec![
                        row.month.clone(),
                        row.orders.to_string(),
                        Cents(row.revenue_cents).to_string(),
                    ]
                })
                .collect(),
        ),
        Report::Counts(rows) => table(
            &[("Table", Left), ("Rows", Right)],
            rows.iter()
                .map(|row| vec![row.table.clone(), row.rows.to_string()])
                .collect(),
        ),
    }
}

fn table(columns: &[(&str, CellAlignment)], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(columns.iter().map(|(title, _)| *title).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row);
    }
    for (index, (_, alignment)) in columns.iter().enumerate() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(*alignment);
        }
    }
    table.to_string()
}
