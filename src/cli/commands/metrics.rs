use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::core::metrics::{count_contacted_within, personnel_per_company, unique_companies};
use crate::core::reconcile::status_breakdown;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{header, metric};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Metrics { days } = cmd {
        let days = days.unwrap_or(cfg.recent_contact_days);

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let view = Core::reconciled_view(&mut pool, cfg)?;
        let call_log = queries::load_call_log(&pool.conn)?;

        let client_ids: Vec<String> = view.iter().map(|r| r.client_id.clone()).collect();
        let contacted = count_contacted_within(&call_log, &client_ids, days, date::now());

        header("Client metrics");
        metric("Total clients", view.len());
        metric(
            "Unique companies",
            unique_companies(view.iter().map(|r| r.company.as_str())),
        );
        metric(
            "Open pipeline",
            view.iter().filter(|r| !r.status.is_closed()).count(),
        );
        metric(format!("Contacted in last {} days", days), contacted);

        println!("\nStatus breakdown:");
        for (status, n) in status_breakdown(&view) {
            println!("  {:<12} {}", status.to_db_str(), n);
        }

        println!("\nPersonnel per company:");
        for (company, n) in personnel_per_company(&view) {
            println!("  {:<30} {}", company, n);
        }
        println!();
    }

    Ok(())
}
