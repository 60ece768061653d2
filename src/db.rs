use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::RunQueryDsl;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// How long a request waits for a pooled connection before giving up.
/// Surfaced to clients as 503, see `AppError::Unavailable`.
const POOL_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Server-side cap on a single statement's runtime, in milliseconds.
const STATEMENT_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy)]
struct StatementTimeout(u32);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for StatementTimeout {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query(format!("SET statement_timeout = {}", self.0))
            .execute(conn)
            .map(|_| ())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build the connection pool without eagerly connecting.
///
/// An unreachable database at startup is not fatal; the first checkout that
/// needs a connection fails and the error is answered per-request.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .connection_timeout(POOL_CHECKOUT_TIMEOUT)
        .min_idle(Some(0))
        .connection_customizer(Box::new(StatementTimeout(STATEMENT_TIMEOUT_MS)))
        .build_unchecked(manager)
}
