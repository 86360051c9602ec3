use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the migration bookkeeping table exists.
fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

/// Check if a migration version has already been applied.
pub fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    ensure_migrations_table(conn)?;
    let mut stmt = conn.prepare("SELECT 1 FROM schema_migrations WHERE version = ?1 LIMIT 1")?;
    let found: Option<i32> = stmt.query_row([version], |row| row.get(0)).optional()?;
    Ok(found.is_some())
}

/// Record a migration version as applied.
pub fn mark_applied(conn: &Connection, version: &str) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_migrations (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the three override-store tables with the modern schema.
fn create_override_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS client_status (
            client_id      TEXT PRIMARY KEY,
            status         TEXT NOT NULL DEFAULT 'open'
                           CHECK(status IN ('open','contacted','engaged','negotiation','won','lost','on-hold')),
            last_contacted TEXT
        );

        CREATE TABLE IF NOT EXISTS logs (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id TEXT NOT NULL,
            note      TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS industry_overrides (
            client_id           TEXT PRIMARY KEY,
            overridden_industry TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_logs_client_ts ON logs(client_id, timestamp);
        "#,
    )?;
    Ok(())
}

/// Migrate an early `client_status` table (status only) to include
/// `last_contacted`.
fn migrate_add_last_contacted(conn: &Connection) -> Result<()> {
    let version = "20260110_0002_add_last_contacted";

    if is_applied(conn, version)? {
        return Ok(());
    }

    if !table_exists(conn, "client_status")? {
        return Ok(()); // nessuna tabella → niente da migrare
    }

    if has_column(conn, "client_status", "last_contacted")? {
        mark_applied(conn, version)?;
        return Ok(());
    }

    warning("Adding 'last_contacted' column to client_status table...");

    conn.execute("ALTER TABLE client_status ADD COLUMN last_contacted TEXT;", [])
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'last_contacted' column: {}", e)),
            )
        })?;

    mark_applied(conn, version)?;

    success(format!(
        "Migration applied: {} → added 'last_contacted' to client_status table",
        version
    ));

    Ok(())
}

/// Migrate a legacy flat `call_log` table (pre relational-store design) into
/// the `logs` table, preserving ids and timestamps.
fn migrate_legacy_call_log(conn: &Connection) -> Result<()> {
    let version = "20260110_0003_fold_call_log_into_logs";

    if is_applied(conn, version)? {
        return Ok(());
    }

    if !table_exists(conn, "call_log")? {
        mark_applied(conn, version)?;
        return Ok(());
    }

    warning("Legacy call_log table detected — folding into logs...");

    conn.execute_batch(
        r#"
        BEGIN;

        INSERT INTO logs (client_id, note, timestamp)
        SELECT client_id, note, timestamp FROM call_log ORDER BY id ASC;

        DROP TABLE call_log;

        COMMIT;
        "#,
    )?;

    mark_applied(conn, version)?;
    success(format!(
        "Migration applied: {} → legacy call_log folded into logs",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Bookkeeping table first
    ensure_migrations_table(conn)?;

    // 2) Base schema
    create_override_tables(conn)?;
    if !is_applied(conn, "20260110_0001_create_override_tables")? {
        mark_applied(conn, "20260110_0001_create_override_tables")?;
    }

    // 3) Incremental upgrades
    migrate_add_last_contacted(conn)?;
    migrate_legacy_call_log(conn)?;

    // Config-file migrations are deliberately NOT run here: they rewrite the
    // user's config file, so only `config --migrate` may trigger them.

    Ok(())
}
