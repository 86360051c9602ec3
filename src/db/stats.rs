use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let statuses: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM client_status", [], |row| row.get(0))?;
    let notes: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
    let overrides: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM industry_overrides", [], |row| {
            row.get(0)
        })?;

    println!(
        "{}• Status records:{}    {}{}{}",
        CYAN, RESET, GREEN, statuses, RESET
    );
    println!(
        "{}• Call notes:{}        {}{}{}",
        CYAN, RESET, GREEN, notes, RESET
    );
    println!(
        "{}• Industry overrides:{} {}{}{}",
        CYAN, RESET, GREEN, overrides, RESET
    );

    //
    // 3) CONTACT RANGE
    //
    let first_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM logs ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM logs ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Contact range:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    println!();
    Ok(())
}
