use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::Dataset,
    domain::category::Category as DomainCategory,
    domain::customer::Customer as DomainCustomer,
    domain::order::{Order as DomainOrder, OrderItem as DomainOrderItem},
    domain::payment::Payment as DomainPayment,
    domain::product::Product as DomainProduct,
    models::category::{Category as DbCategory, NewCategory as DbNewCategory},
    models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer},
    models::order::{
        NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
        OrderItem as DbOrderItem,
    },
    models::payment::{NewPayment as DbNewPayment, Payment as DbPayment},
    models::product::{NewProduct as DbNewProduct, Product as DbProduct},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DatasetReader, DatasetWriter, DieselRepository},
};

/// Rows per multi-row `INSERT`.
pub const CHUNK_SIZE: usize = 500;

impl DieselRepository {
    fn load_table<T>(
        &self,
        table: &'static str,
        rows: &[T],
        row_id: impl Fn(&T) -> i32,
        insert: impl Fn(&mut SqliteConnection, &[T]) -> QueryResult<usize>,
    ) -> RepositoryResult<usize> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        let inserted = conn.transaction::<usize, RepositoryError, _>(|conn| {
            insert_chunked(conn, table, rows, &row_id, &insert)
        })?;

        log::debug!("loaded {inserted} rows into {table}");
        Ok(inserted)
    }
}

fn insert_chunked<T>(
    conn: &mut SqliteConnection,
    table: &'static str,
    rows: &[T],
    row_id: &impl Fn(&T) -> i32,
    insert: &impl Fn(&mut SqliteConnection, &[T]) -> QueryResult<usize>,
) -> RepositoryResult<usize> {
    let mut inserted = 0;

    for chunk in rows.chunks(CHUNK_SIZE) {
        match insert(conn, chunk) {
            Ok(count) => inserted += count,
            Err(err @ DieselError::DatabaseError(..)) => {
                return Err(locate_rejected_row(conn, table, chunk, row_id, insert, err));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(inserted)
}

/// Replay a rejected chunk one row at a time to name the row the store refused.
///
/// Runs inside the table's transaction, so rows that succeed here are rolled
/// back with everything else.
fn locate_rejected_row<T>(
    conn: &mut SqliteConnection,
    table: &'static str,
    chunk: &[T],
    row_id: &impl Fn(&T) -> i32,
    insert: &impl Fn(&mut SqliteConnection, &[T]) -> QueryResult<usize>,
    chunk_error: DieselError,
) -> RepositoryError {
    for row in chunk {
        if let Err(err) = insert(conn, std::slice::from_ref(row)) {
            let message = match &err {
                DieselError::DatabaseError(_, info) => info.message().to_string(),
                other => other.to_string(),
            };
            log::error!("{table} row {} rejected: {message}", row_id(row));
            return RepositoryError::ConstraintViolation {
                table,
                row_id: row_id(row),
                message,
            };
        }
    }

    chunk_error.into()
}

impl DatasetWriter for DieselRepository {
    fn insert_categories(&self, categories: &[DomainCategory]) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let rows: Vec<DbNewCategory> = categories.iter().map(Into::into).collect();
        self.load_table(
            "categories",
            &rows,
            |row| row.id,
            |conn, chunk| {
                diesel::insert_into(categories::table)
                    .values(chunk)
                    .execute(conn)
            },
        )
    }

    fn insert_products(&self, products: &[DomainProduct]) -> RepositoryResult<usize> {
        use crate::schema::products;

        let rows: Vec<DbNewProduct> = products.iter().map(Into::into).collect();
        self.load_table(
            "products",
            &rows,
            |row| row.id,
            |conn, chunk| {
                diesel::insert_into(products::table)
                    .values(chunk)
                    .execute(conn)
            },
        )
    }

    fn insert_customers(&self, customers: &[DomainCustomer]) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let rows: Vec<DbNewCustomer> = customers.iter().map(Into::into).collect();
        self.load_table(
            "customers",
            &rows,
            |row| row.id,
            |conn, chunk| {
                diesel::insert_into(customers::table)
                    .values(chunk)
                    .execute(conn)
            },
        )
    }

    fn insert_orders(&self, orders: &[DomainOrder]) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let rows: Vec<DbNewOrder> = orders.iter().map(Into::into).collect();
        self.load_table(
            "orders",
            &rows,
            |row| row.id,
            |conn, chunk| {
                diesel::insert_into(orders::table)
                    .values(chunk)
                    .execute(conn)
            },
        )
    }

    fn insert_order_items(&self, items: &[DomainOrderItem]) -> RepositoryResult<usize> {
        use crate::schema::order_items;

        let rows: Vec<DbNewOrderItem> = items.iter().map(Into::into).collect();
        self.load_table(
            "order_items",
            &rows,
            |row| row.id,
            |conn, chunk| {
                diesel::insert_into(order_items::table)
                    .values(chunk)
                    .execute(conn)
            },
        )
    }

    fn insert_payments(&self, payments: &[DomainPayment]) -> RepositoryResult<usize> {
        use crate::schema::payments;

        let rows: Vec<DbNewPayment> = payments.iter().map(Into::into).collect();
        self.load_table(
            "payments",
            &rows,
            |row| row.id,
            |conn, chunk| {
                diesel::insert_into(payments::table)
                    .values(chunk)
                    .execute(conn)
            },
        )
    }

    fn replace_payments(&self, payments: &[DomainPayment]) -> RepositoryResult<usize> {
        use crate::schema::payments;

        let rows: Vec<DbNewPayment> = payments.iter().map(Into::into).collect();
        let insert = |conn: &mut SqliteConnection, chunk: &[DbNewPayment]| {
            diesel::insert_into(payments::table)
                .values(chunk)
                .execute(conn)
        };
        let row_id = |row: &DbNewPayment| row.id;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let (removed, inserted) = conn.transaction::<_, RepositoryError, _>(|conn| {
            let removed = diesel::delete(payments::table).execute(conn)?;
            let inserted = insert_chunked(conn, "payments", &rows, &row_id, &insert)?;
            Ok((removed, inserted))
        })?;

        log::debug!("replaced {removed} stored payments with {inserted}");
        Ok(inserted)
    }
}

impl DatasetReader for DieselRepository {
    fn read_dataset(&self) -> RepositoryResult<Dataset> {
        use crate::schema::{categories, customers, order_items, orders, payments, products};

        let mut conn = self.conn()?;

        let categories = categories::table
            .order(categories::id.asc())
            .select(DbCategory::as_select())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();
        let products = products::table
            .order(products::id.asc())
            .select(DbProduct::as_select())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();
        let customers = customers::table
            .order(customers::id.asc())
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();
        let orders = orders::table
            .order(orders::id.asc())
            .select(DbOrder::as_select())
            .load::<DbOrder>(&mut conn)?
            .into_iter()
            .map(DomainOrder::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let order_items = order_items::table
            .order(order_items::id.asc())
            .select(DbOrderItem::as_select())
            .load::<DbOrderItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();
        let payments = payments::table
            .order(payments::id.asc())
            .select(DbPayment::as_select())
            .load::<DbPayment>(&mut conn)?
            .into_iter()
            .map(DomainPayment::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset {
            categories,
            products,
            customers,
            orders,
            order_items,
            payments,
        })
    }
}
