//! SQLite connection pool setup.
//!
//! `DATABASE_URL` may use the SQLAlchemy-style forms `sqlite:///relative/path.db`
//! and `sqlite:////absolute/path.db` as well as native sqlx URLs such as
//! `sqlite://file.db` or `sqlite::memory:`.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Prefix of SQLAlchemy-style SQLite URLs; the remainder is a filesystem path.
const TRIPLE_SLASH_PREFIX: &str = "sqlite:///";

/// Parses a SQLite connection string into connect options.
///
/// The database file is created if it does not exist.
///
/// # Errors
///
/// Returns an error if the string is not a valid SQLite URL.
///
/// # Examples
///
/// ```ignore
/// let opts = connect_options("sqlite:///./data/shortener.db").unwrap();
/// assert_eq!(opts.get_filename(), Path::new("./data/shortener.db"));
/// ```
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = if let Some(path) = database_url.strip_prefix(TRIPLE_SLASH_PREFIX) {
        SqliteConnectOptions::new().filename(path)
    } else {
        SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid SQLite connection string '{database_url}'"))?
    };

    Ok(options.create_if_missing(true))
}

/// Creates the parent directory of an on-disk database file.
fn ensure_parent_dir(filename: &Path) -> Result<()> {
    if filename.as_os_str() == ":memory:" {
        return Ok(());
    }

    if let Some(parent) = filename.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        tracing::info!("Created database directory {}", parent.display());
    }

    Ok(())
}

/// Opens the connection pool and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the database cannot be opened,
/// or a migration fails.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool> {
    let options = connect_options(database_url)?;
    ensure_parent_dir(options.get_filename())?;

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlalchemy_relative_path() {
        let opts = connect_options("sqlite:///./data/shortener.db").unwrap();
        assert_eq!(opts.get_filename(), Path::new("./data/shortener.db"));
    }

    #[test]
    fn test_sqlalchemy_absolute_path() {
        let opts = connect_options("sqlite:////var/lib/shortener/db.sqlite").unwrap();
        assert_eq!(opts.get_filename(), Path::new("/var/lib/shortener/db.sqlite"));
    }

    #[test]
    fn test_native_sqlx_url() {
        let opts = connect_options("sqlite://shortener.db").unwrap();
        assert_eq!(opts.get_filename(), Path::new("shortener.db"));
    }

    #[test]
    fn test_in_memory_parent_dir_is_noop() {
        assert!(ensure_parent_dir(Path::new(":memory:")).is_ok());
    }

    #[test]
    fn test_bare_filename_needs_no_directory() {
        assert!(ensure_parent_dir(Path::new("shortener.db")).is_ok());
    }

    #[tokio::test]
    async fn test_connect_in_memory_runs_migrations() {
        let pool = connect("sqlite::memory:", 1, Duration::from_secs(5))
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(count, 0);
    }
}
