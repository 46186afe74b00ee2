use actix_web::web;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PoolError};

pub(crate) type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

//let's just box every store failure, the handlers only report that something failed
pub(crate) type DbError = Box<dyn std::error::Error + Send + Sync>;

pub(crate) fn init_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder().build(manager)
}

/// Checks a connection out of `pool` and runs `f` with it on the blocking
/// thread pool.
///
/// Pool checkout, blocking pool and query failures all come back as a
/// [`DbError`].
pub(crate) async fn run<F, T>(pool: &DbPool, f: F) -> Result<T, DbError>
where
    F: FnOnce(&PgConnection) -> Result<T, DbError> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    web::block(move || {
        let conn = pool.get()?;
        f(&*conn)
    })
    .await?
}

/// A pool whose every checkout fails quickly.
#[cfg(test)]
pub(crate) fn unreachable_pool() -> DbPool {
    use std::time::Duration;

    let manager = ConnectionManager::<PgConnection>::new("postgres://nobody@127.0.0.1:1/nowhere");
    r2d2::Pool::builder()
        .max_size(1)
        .connection_timeout(Duration::from_millis(250))
        .build_unchecked(manager)
}
