use crate::errors::{AppError, AppResult};
use crate::models::call_log::CallLogEntry;
use crate::models::overrides::{IndustryOverride, OverrideSnapshot, StatusRecord};
use crate::models::status::Status;
use chrono::{DateTime, Local};
use rusqlite::{Connection, Result, Row, params};

/// Upsert the status fact for a client.
/// The status string must parse into the fixed enum, otherwise nothing is
/// written and `InvalidStatus` is returned.
pub fn set_status(conn: &Connection, client_id: &str, status: &str) -> AppResult<()> {
    let parsed = Status::from_input(status).ok_or_else(|| {
        AppError::InvalidStatus(format!(
            "'{}' (expected one of: {})",
            status,
            Status::all()
                .iter()
                .map(|s| s.to_db_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    conn.execute(
        "INSERT INTO client_status (client_id, status)
         VALUES (?1, ?2)
         ON CONFLICT(client_id) DO UPDATE SET status = excluded.status",
        params![client_id, parsed.to_db_str()],
    )?;
    Ok(())
}

/// Append a call note and bump the client's last-contacted timestamp.
///
/// Both writes happen inside one transaction: a crash can never leave the
/// note durable with the status record stale.
pub fn log_call(
    conn: &mut Connection,
    client_id: &str,
    note: &str,
    timestamp: DateTime<Local>,
) -> AppResult<()> {
    let note = note.trim();
    if note.is_empty() {
        return Err(AppError::EmptyNote);
    }

    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO logs (client_id, note, timestamp) VALUES (?1, ?2, ?3)",
        params![client_id, note, timestamp.to_rfc3339()],
    )?;

    tx.execute(
        "INSERT INTO client_status (client_id, status, last_contacted)
         VALUES (?1, 'open', ?2)
         ON CONFLICT(client_id) DO UPDATE SET last_contacted = excluded.last_contacted",
        params![client_id, timestamp.to_rfc3339()],
    )?;

    tx.commit()?;
    Ok(())
}

/// Upsert the operator-supplied industry label for a client.
/// Last write wins; an empty label is rejected before any write.
pub fn set_industry_override(conn: &Connection, client_id: &str, industry: &str) -> AppResult<()> {
    let industry = industry.trim();
    if industry.is_empty() {
        return Err(AppError::InvalidInput(
            "industry label must not be empty".to_string(),
        ));
    }

    conn.execute(
        "INSERT INTO industry_overrides (client_id, overridden_industry)
         VALUES (?1, ?2)
         ON CONFLICT(client_id) DO UPDATE SET overridden_industry = excluded.overridden_industry",
        params![client_id, industry],
    )?;
    Ok(())
}

fn map_status_row(row: &Row) -> Result<StatusRecord> {
    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    let last_contacted: Option<String> = row.get("last_contacted")?;
    let last_contacted = match last_contacted {
        Some(ts) => Some(parse_ts(&ts)?),
        None => None,
    };

    Ok(StatusRecord {
        client_id: row.get("client_id")?,
        status,
        last_contacted,
    })
}

fn map_log_row(row: &Row) -> Result<CallLogEntry> {
    let ts_str: String = row.get("timestamp")?;

    Ok(CallLogEntry {
        id: row.get("id")?,
        client_id: row.get("client_id")?,
        note: row.get("note")?,
        timestamp: parse_ts(&ts_str)?,
    })
}

fn parse_ts(raw: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Local))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(raw.to_string())),
            )
        })
}

pub fn load_status_records(conn: &Connection) -> AppResult<Vec<StatusRecord>> {
    let mut stmt = conn.prepare(
        "SELECT client_id, status, last_contacted
         FROM client_status
         ORDER BY client_id ASC",
    )?;

    let rows = stmt.query_map([], map_status_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full call log, newest-first (display order).
pub fn load_call_log(conn: &Connection) -> AppResult<Vec<CallLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, note, timestamp
         FROM logs
         ORDER BY timestamp DESC, id DESC",
    )?;

    let rows = stmt.query_map([], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Call log for one client, newest-first.
pub fn load_call_log_for(conn: &Connection, client_id: &str) -> AppResult<Vec<CallLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, client_id, note, timestamp
         FROM logs
         WHERE client_id = ?1
         ORDER BY timestamp DESC, id DESC",
    )?;

    let rows = stmt.query_map([client_id], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_industry_overrides(conn: &Connection) -> AppResult<Vec<IndustryOverride>> {
    let mut stmt = conn.prepare(
        "SELECT client_id, overridden_industry
         FROM industry_overrides
         ORDER BY client_id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(IndustryOverride {
            client_id: row.get(0)?,
            industry: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full snapshot of the override store, read for every reconciliation.
pub fn get_all(conn: &Connection) -> AppResult<OverrideSnapshot> {
    Ok(OverrideSnapshot {
        statuses: load_status_records(conn)?,
        call_log: load_call_log(conn)?,
        industry_overrides: load_industry_overrides(conn)?,
    })
}
