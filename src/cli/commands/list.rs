use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::core::metrics;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::client::ClientRecord;
use crate::models::status::Status;
use crate::ui::messages::warning;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        industry,
        status,
        company,
    } = cmd
    {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let view = Core::reconciled_view(&mut pool, cfg)?;

        let status_filter = match status.as_deref() {
            Some(raw) => Some(
                Status::from_input(raw)
                    .ok_or_else(|| crate::errors::AppError::InvalidStatus(raw.to_string()))?,
            ),
            None => None,
        };

        let filtered: Vec<&ClientRecord> = view
            .iter()
            .filter(|r| match industry {
                Some(wanted) => r
                    .industry
                    .as_deref()
                    .is_some_and(|i| i.eq_ignore_ascii_case(wanted)),
                None => true,
            })
            .filter(|r| match status_filter {
                Some(wanted) => r.status == wanted,
                None => true,
            })
            .filter(|r| match company {
                Some(wanted) => r.company.eq_ignore_ascii_case(wanted),
                None => true,
            })
            .collect();

        if filtered.is_empty() {
            warning("No clients match the current filters.");
            return Ok(());
        }

        print_clients(&filtered, cfg);

        println!("\nTotal clients:    {}", filtered.len());
        println!(
            "Unique companies: {}",
            metrics::unique_companies(filtered.iter().map(|r| r.company.as_str()))
        );
    }
    Ok(())
}

fn print_clients(rows: &[&ClientRecord], cfg: &Config) {
    let headers = [
        "client",
        "title",
        "industry",
        "status",
        "last contact",
        "industry revenue",
    ];

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.client_id.clone(),
                r.title.clone().unwrap_or_else(|| "--".to_string()),
                r.industry.clone().unwrap_or_else(|| "--".to_string()),
                r.status.to_db_str().to_string(),
                if r.last_contacted.is_some() {
                    r.last_contacted_str()
                } else {
                    "--".to_string()
                },
                r.industry_revenue
                    .map(|v| format!("{:.2}", v))
                    .unwrap_or_else(|| "--".to_string()),
            ]
        })
        .collect();

    let table = Table::fitted(&headers, cells, cfg.max_column_width);
    print!("{}", table.render());
}
