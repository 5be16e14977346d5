//! SQLite store lifecycle: pooling, pragmas, schema creation and teardown.
//!
//! The store is a disposable build artifact. A load deletes the file and
//! recreates it from the embedded migrations; nothing is ever migrated in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sql_types::BigInt;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Tables created by the migrations, in load order.
pub const TABLES: [&str; 6] = [
    "categories",
    "products",
    "customers",
    "orders",
    "order_items",
    "payments",
];

/// Applied to every pooled connection: SQLite leaves foreign keys off by default.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a connection pool for the SQLite file at `database_url`, creating it if absent.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(2)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

/// Apply every embedded migration that has not run yet.
pub fn run_migrations(conn: &mut SqliteConnection) -> RepositoryResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| RepositoryError::Migration(err.to_string()))
}

/// Delete any store at `path` and create a fresh one with an empty schema.
pub fn rebuild_store(path: &Path) -> RepositoryResult<DbPool> {
    for stale in store_files(path) {
        match fs::remove_file(&stale) {
            Ok(()) => log::info!("removed existing {}", stale.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(RepositoryError::Reset { path: stale, source }),
        }
    }

    let pool = establish_connection_pool(&path.to_string_lossy())?;
    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;
    log::info!("created store {}", path.display());
    Ok(pool)
}

/// Open an existing, initialised store; never creates one.
pub fn open_store(path: &Path) -> RepositoryResult<DbPool> {
    if !path.is_file() {
        return Err(RepositoryError::StoreMissing(path.to_path_buf()));
    }

    let pool = establish_connection_pool(&path.to_string_lossy())?;
    let mut conn = pool.get()?;
    if !has_schema(&mut conn)? {
        return Err(RepositoryError::StoreMissing(path.to_path_buf()));
    }
    Ok(pool)
}

#[derive(QueryableByName)]
struct TableTally {
    #[diesel(sql_type = BigInt)]
    tables: i64,
}

fn has_schema(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    let names = TABLES
        .iter()
        .map(|table| format!("'{table}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let tally = diesel::sql_query(format!(
        "SELECT COUNT(*) AS tables FROM sqlite_master WHERE type = 'table' AND name IN ({names})"
    ))
    .get_result::<TableTally>(conn)?;
    Ok(tally.tables == TABLES.len() as i64)
}

fn store_files(path: &Path) -> Vec<PathBuf> {
    let mut files = vec![path.to_path_buf()];
    for suffix in ["-wal", "-shm", "-journal"] {
        let mut sibling = path.as_os_str().to_owned();
        sibling.push(suffix);
        files.push(PathBuf::from(sibling));
    }
    files
}
