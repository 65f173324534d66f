//! Repeated-word scan over the stored corpus.
//!
//! Fetches every report from the database and runs the pure
//! [`filter_repeated`] pass, printing the qualifying reports. Used by
//! the `reportd scan` CLI command; the HTTP endpoint goes through the
//! same core function.

use anyhow::Result;

use report_desk_core::analysis::filter_repeated;
use report_desk_core::store::Store;

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Run the scan command: load the corpus, filter, and print a summary.
pub async fn run_scan(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool);

    let corpus = store.all_reports().await?;
    let flagged = filter_repeated(&corpus);

    if flagged.is_empty() {
        println!("No reports with a repeated word ({} scanned).", corpus.len());
        return Ok(());
    }

    println!(
        "Reports with a word repeated 3+ times ({} of {}):",
        flagged.len(),
        corpus.len()
    );
    for report in &flagged {
        let preview: String = report.text.chars().take(60).collect();
        println!("  {}  [project {}]  {}", report.id, report.project_id, preview);
    }

    Ok(())
}
