//! Database statistics overview.
//!
//! Provides a quick summary of what's stored: project and report counts,
//! database size, and how many reports currently trip the repeated-word
//! detector. Used by `reportd stats` to give confidence that the API and
//! detector are working as expected.

use anyhow::Result;
use sqlx::Row;

use report_desk_core::analysis::filter_repeated;
use report_desk_core::store::Store;

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Per-project breakdown of report counts.
struct ProjectStats {
    name: String,
    report_count: i64,
}

/// Run the stats command: query the database and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    let total_projects: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await?;

    let total_reports: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
        .fetch_one(&pool)
        .await?;

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    let store = SqliteStore::new(pool.clone());
    let qualifying = filter_repeated(&store.all_reports().await?).len();

    println!("Report Desk — Database Stats");
    println!("============================");
    println!();
    println!("  Database:    {}", config.db.path.display());
    println!("  Size:        {}", format_bytes(db_size));
    println!();
    println!("  Projects:    {}", total_projects);
    println!("  Reports:     {}", total_reports);
    println!("  Flagged:     {} (word repeated 3+ times)", qualifying);

    // Per-project breakdown
    let project_rows = sqlx::query(
        r#"
        SELECT p.name, COUNT(r.id) AS report_count
        FROM projects p
        LEFT JOIN reports r ON r.project_id = p.id
        GROUP BY p.id
        ORDER BY report_count DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let project_stats: Vec<ProjectStats> = project_rows
        .iter()
        .map(|row| ProjectStats {
            name: row.get("name"),
            report_count: row.get("report_count"),
        })
        .collect();

    if !project_stats.is_empty() {
        println!();
        println!("  By project:");
        println!("  {:<32} {:>8}", "PROJECT", "REPORTS");
        println!("  {}", "-".repeat(42));
        for p in &project_stats {
            println!("  {:<32} {:>8}", p.name, p.report_count);
        }
    }

    println!();

    pool.close().await;
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
