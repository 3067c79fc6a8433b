use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::process;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trend_report::models::{LookbackWindow, RepositoryRecord, ReportRequest, ReportResponse};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BIN_NAME: &str = env!("CARGO_BIN_NAME");
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(about = "Generate a trending repository report for a topic", long_about = None)]
#[command(version = VERSION)]
struct Args {
    /// Search topic (e.g., robot path planning)
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Lookback window: 6m, 1y, 3y or a number of days
    #[arg(short, long, default_value = "1y", value_parser = parse_days)]
    days: i64,

    /// Server URL (defaults to $TREND_REPORT_URL, then http://127.0.0.1:5000)
    #[arg(short, long)]
    server: Option<String>,

    /// Print the raw JSON response
    #[arg(short, long)]
    json: bool,

    /// Color output mode (also respects NO_COLOR and FORCE_COLOR env vars)
    #[arg(long, visible_alias = "colour", value_enum, default_value = "auto")]
    color: ColorMode,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn parse_days(s: &str) -> Result<i64, String> {
    if let Ok(days) = s.trim().parse::<i64>() {
        return Ok(days);
    }
    s.parse::<LookbackWindow>().map(LookbackWindow::days)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", BIN_NAME.replace('-', "_")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    configure_colors(args.color);

    let base_url = args
        .server
        .or_else(|| std::env::var("TREND_REPORT_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    let request = ReportRequest {
        query: args.query.join(" "),
        days: Some(args.days.into()),
    };

    let client = reqwest::Client::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Searching and summarizing \"{}\" ({})",
        request.query,
        window_label(args.days)
    ));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = request_summary(&client, &base_url, &request).await;
    spinner.finish_and_clear();

    match result {
        Ok(response) => {
            if args.json {
                match serde_json::to_string_pretty(&response) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        tracing::error!("Failed to serialize response: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                print_repositories(&response.repos);
                print_summary(&response.summary);
            }
        }
        Err(e) => {
            tracing::error!("Report request failed: {}", e);
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn request_summary(
    client: &reqwest::Client,
    base_url: &str,
    request: &ReportRequest,
) -> Result<ReportResponse, Box<dyn std::error::Error>> {
    let url = format!("{}/summary", base_url.trim_end_matches('/'));
    tracing::debug!("POST {}", url);

    let response = client.post(&url).json(request).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"].as_str().map(str::to_string))
            .unwrap_or(body);
        return Err(format!("HTTP {status}: {message}").into());
    }

    Ok(response.json().await?)
}

fn window_label(days: i64) -> String {
    match LookbackWindow::from_days(days) {
        Some(window) => window.to_string(),
        None => format!("{days} days"),
    }
}

fn print_repositories(repos: &[RepositoryRecord]) {
    println!("{}", "Repositories".bold());
    println!("{}", "=".repeat(50));

    if repos.is_empty() {
        println!("  {}", "No repositories matched the trend filter".dimmed());
    }

    for (index, repo) in repos.iter().enumerate() {
        println!(
            "{:>2}. {}  {} {}  {} {}  {}",
            index + 1,
            repo.full_name.cyan().bold(),
            "★".yellow(),
            repo.stargazers_count,
            "⑂".blue(),
            repo.forks_count,
            repo.created_at.format("%Y-%m-%d").to_string().dimmed(),
        );
        match &repo.description {
            Some(description) => println!("    {description}"),
            None => println!("    {}", "(no description)".dimmed()),
        }
    }

    println!();
}

fn print_summary(summary: &str) {
    println!("{}", "Report".bold());
    println!("{}", "=".repeat(50));
    println!("{summary}");
}

fn configure_colors(mode: ColorMode) {
    // Check environment variables first (they take precedence)
    if std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
        return;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        colored::control::set_override(true);
        return;
    }

    match mode {
        ColorMode::Auto => {}
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}
