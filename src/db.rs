use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

pub fn init_pool_at(path: &str) -> Result<DbPool, Box<dyn std::error::Error>> {
    // WAL for concurrent readers; applied on every pooled connection
    let manager = SqliteConnectionManager::file(path)
        .with_init(|conn| conn.execute_batch("PRAGMA journal_mode=WAL;"));
    let pool = Pool::builder().max_size(10).build(manager)?;

    Ok(pool)
}

/// Creates the tables the extension reads from. The employee tables normally
/// belong to the HR application; creating them here lets a standalone install boot.
/// No foreign keys: the host owns these rows, so `job_title` and
/// `employment_status` may point at ids that no longer exist.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    conn.execute_batch(
        "
        -- Settings (name/value, grouped by category)
        CREATE TABLE IF NOT EXISTS settings (
            name TEXT PRIMARY KEY,
            value TEXT,
            description TEXT,
            category TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS job_titles (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS employment_statuses (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL DEFAULT '',
            last_name TEXT NOT NULL DEFAULT '',
            mobile_phone TEXT,
            country TEXT,
            job_title INTEGER,
            employment_status INTEGER,
            status TEXT NOT NULL DEFAULT 'Active'
        );
        ",
    )?;

    Ok(())
}
