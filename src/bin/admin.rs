//! CLI administration tool for shortlink.
//!
//! Provides commands for inspecting links, deactivating them, viewing
//! statistics, and performing database checks without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List active links
//! cargo run --bin admin -- links
//!
//! # Deactivate a link
//! cargo run --bin admin -- deactivate abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`DATABASE_URL`, `BASE_URL`, ...).
//! See [`shortlink::config`].

use shortlink::config::{self, mask_connection_string};
use shortlink::infrastructure::persistence;
use shortlink::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::time::Duration;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List active links
    Links,

    /// Deactivate a link (its analytics are kept)
    Deactivate {
        /// Short code to deactivate
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_connect_timeout),
    )
    .await
    .with_context(|| {
        format!(
            "Failed to connect to {}",
            mask_connection_string(&config.database_url)
        )
    })?;

    persistence::migrate(&pool)
        .await
        .context("Failed to apply migrations")?;

    let state = AppState::from_config(pool.clone(), &config);

    match cli.command {
        Commands::Links => list_links(&state).await?,
        Commands::Deactivate { code, yes } => deactivate_link(&state, &code, yes).await?,
        Commands::Stats => handle_stats(&state).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config.database_url).await?,
    }

    pool.close().await;

    Ok(())
}

/// Lists active links, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Active Links
///
///   Code       Clicks   Created            URL
///   ────────────────────────────────────────────────────────────────────
///   abc123     17       2025-01-15 10:30   https://example.com/page
/// ```
async fn list_links(state: &AppState) -> Result<()> {
    println!("{}", "📋 Active Links".bright_blue().bold());
    println!();

    let links = state
        .link_service
        .list_active()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No active links".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        let code = if link.is_expired() {
            link.short_code.bright_black()
        } else {
            link.short_code.cyan()
        };

        println!(
            "  {:<10} {:<8} {:<18} {}",
            code,
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deactivates a link after confirmation.
///
/// Already inactive links are reported and left untouched.
async fn deactivate_link(state: &AppState, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔒 Deactivate Link".bright_blue().bold());
    println!();

    let link = state
        .link_service
        .get_link_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if !link.is_active {
        println!("{}", "⚠️  This link is already inactive".yellow());
        return Ok(());
    }

    println!("  Code:   {}", link.short_code.cyan());
    println!("  URL:    {}", link.original_url);
    println!("  Clicks: {}", link.clicks.to_string().bright_green());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Deactivate this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .link_service
        .deactivate(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to deactivate link: {}", e))?;

    println!();
    println!("{}", "✅ Link deactivated".green().bold());
    println!();

    Ok(())
}

/// Displays service-wide statistics and the daily click series.
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let overview = state
        .analytics_service
        .overview()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Active links:  {}",
        overview.total_links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        overview.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Today:         {}",
        overview.today_clicks.to_string().bright_green().bold()
    );

    if !overview.click_data.is_empty() {
        println!();
        for day in &overview.click_data {
            println!(
                "  {}  {}",
                day.date.to_string().bright_black(),
                day.clicks.to_string().bright_white()
            );
        }
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:   {}", version.bright_white());
            println!(
                "  Location: {}",
                mask_connection_string(database_url).bright_white()
            );
            println!();
        }
    }

    Ok(())
}
