use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::config::Config;
use trade_journal::journal::JournalSnapshot;
use trade_journal::reporting::Dashboard;

fn main() -> Result<()> {
    let mut cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    // Usage: journal-report [path] [--json]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    if let Some(path) = args.iter().find(|a| !a.starts_with("--")) {
        cfg.journal_path = path.clone();
    }

    let snapshot = JournalSnapshot::load(&cfg.journal_path)?;
    let dashboard = Dashboard::build(&snapshot, &cfg);
    info!(
        "Dashboard ready: {} trades analyzed, {} checklist items ranked",
        dashboard.analyzed_trades,
        dashboard.checklist_impact.len()
    );

    if as_json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        dashboard.print_summary();
    }

    Ok(())
}
