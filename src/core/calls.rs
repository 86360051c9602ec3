use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for a note row based on how the client stands.
fn color_for_status(status: &str) -> Colour {
    match status {
        "won" => Colour::Green,
        "lost" => Colour::Red,
        "negotiation" => Colour::Yellow,
        "engaged" => Colour::Cyan,
        _ => Colour::White,
    }
}

pub struct CallsLogic;

impl CallsLogic {
    /// Print call notes newest-first, optionally for a single client.
    pub fn print_calls(pool: &mut DbPool, cfg: &Config, client: Option<&str>) -> AppResult<()> {
        let entries = match client {
            Some(id) => queries::load_call_log_for(&pool.conn, id)?,
            None => queries::load_call_log(&pool.conn)?,
        };

        if entries.is_empty() {
            println!("No call notes logged.");
            return Ok(());
        }

        let statuses = queries::load_status_records(&pool.conn)?;
        let status_of = |id: &str| {
            statuses
                .iter()
                .find(|s| s.client_id == id)
                .map(|s| s.status.to_db_str())
                .unwrap_or("open")
        };

        // Cap the width of the free-text column. Widths are counted in
        // characters, never bytes: notes are free text and may be multi-byte.
        let note_w = entries
            .iter()
            .map(|e| strip_ansi(&e.note).chars().count())
            .max()
            .unwrap_or(10)
            .min(cfg.max_column_width);

        let id_w = entries
            .iter()
            .map(|e| e.client_id.chars().count())
            .max()
            .unwrap_or(10);

        println!(
            "{:<17} {:<id_w$} {:<note_w$}",
            "timestamp",
            "client",
            "note",
            id_w = id_w,
            note_w = note_w
        );

        for e in &entries {
            let colour = color_for_status(status_of(&e.client_id));

            let plain = strip_ansi(&e.note);
            let note = if plain.chars().count() > note_w {
                let mut truncated: String =
                    plain.chars().take(note_w.saturating_sub(1)).collect();
                truncated.push('…');
                truncated
            } else {
                plain
            };

            println!(
                "{:<17} {:<id_w$} {}",
                e.timestamp_str(),
                e.client_id,
                colour.paint(note),
                id_w = id_w
            );
        }

        println!("\n{} note(s).", entries.len());
        Ok(())
    }
}
