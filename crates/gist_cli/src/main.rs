use std::net::SocketAddr;

use clap::Parser;
use gist_core::{BatchResult, Error, SummarizationRequest};
use gist_inference::{create_model, Config, ModelKind};
use gist_scraper::{init_logging, ArticleResolver, SummaryManager, DEFAULT_MODEL};
use gist_web::AppState;
use tracing::{info, warn};

/// Price per 1000 tokens used for the cost estimate in the text report.
const COST_PER_1K_TOKENS: f64 = 0.002;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize web articles with a completion model", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "openai", help = "Completion backend. Available: openai (default), dummy")]
    model: ModelKind,
    /// Maximum number of URLs processed at once. Unbounded when omitted.
    #[arg(long)]
    max_concurrency: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Summarize the given URLs and print the results
    Summarize {
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print the raw JSON response instead of the text report
        #[arg(long)]
        json: bool,
    },
}

fn build_manager(
    kind: ModelKind,
    max_concurrency: Option<usize>,
    config: &Config,
) -> gist_core::Result<SummaryManager> {
    let model = create_model(kind, config)?;
    let model_name = config.model_name.as_deref().unwrap_or(DEFAULT_MODEL);
    let manager = SummaryManager::new(ArticleResolver::http(), model).with_model_name(model_name);
    Ok(match max_concurrency {
        Some(limit) => manager.with_max_concurrency(limit),
        None => manager,
    })
}

fn render_report(batch: &BatchResult) -> String {
    let mut report = String::new();
    for summary in &batch.results {
        report.push_str(&format!("## {} ({})\n\n", summary.title, summary.url));
        report.push_str(&format!("{}\n\n", summary.summary));
    }

    let titles: Vec<&str> = batch.results.iter().map(|r| r.title.as_str()).collect();
    let usage = batch.total_usage();
    report.push_str(&format!("Titles: {}\n", titles.join(", ")));
    report.push_str(&format!(
        "Tokens: prompt {}, completion {}, total {}\n",
        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
    ));
    report.push_str(&format!("Total cost: ${:.4}\n", usage.cost(COST_PER_1K_TOKENS)));
    report
}

// Every unit runs as a task on this single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging("info");
    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Serve { addr } => {
            let state = match build_manager(cli.model, cli.max_concurrency, &config) {
                Ok(manager) => AppState::new(manager),
                Err(Error::Configuration(message)) => {
                    warn!("⚠️ {}; every request will be refused", message);
                    AppState::unconfigured(message)
                }
                Err(e) => return Err(e.into()),
            };
            gist_web::serve(addr, state).await?;
        }
        Commands::Summarize { urls, json } => {
            let manager = build_manager(cli.model, cli.max_concurrency, &config)?;
            let request = SummarizationRequest::new(urls)?;
            info!("🦗 Summarizing {} url(s)", request.urls().len());

            let batch = manager.summarize(&request).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&batch)?);
            } else {
                print!("{}", render_report(&batch));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gist_core::{CompletionUsage, UrlSummary};

    fn summary(url: &str, title: &str, total: u32) -> UrlSummary {
        UrlSummary {
            url: url.to_string(),
            summary: format!("Docs for {}", title),
            usage: CompletionUsage {
                prompt_tokens: total - 100,
                completion_tokens: 100,
                total_tokens: total,
            },
            title: title.to_string(),
        }
    }

    #[test]
    fn test_report_aggregates_titles_tokens_and_cost() {
        let batch = BatchResult {
            results: vec![
                summary("https://a.example", "Ownership", 1200),
                summary("https://b.example", "Borrowing", 800),
            ],
        };

        let report = render_report(&batch);
        assert!(report.contains("## Ownership (https://a.example)"));
        assert!(report.contains("Titles: Ownership, Borrowing"));
        assert!(report.contains("Tokens: prompt 1800, completion 200, total 2000"));
        assert!(report.contains("Total cost: $0.0040"));
    }

    #[test]
    fn test_cli_parses_summarize() {
        let cli = Cli::try_parse_from(["gist", "--model", "dummy", "summarize", "https://a.example"]).unwrap();
        assert_eq!(cli.model, ModelKind::Dummy);
        assert!(matches!(cli.command, Commands::Summarize { ref urls, json: false } if urls.len() == 1));
    }
}
