use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use janus_client::{HeadHunterClient, SuperJobClient};
use janus_core::error::AppError;
use janus_core::filter::FilterCriteria;
use janus_core::models::VacancyRecord;
use janus_core::search::SearchService;
use janus_store::{JsonFileStore, StoreConfig};

#[derive(Parser)]
#[command(
    name = "janus",
    version,
    about = "Job vacancy aggregator for HeadHunter and SuperJob"
)]
struct Cli {
    /// Directory the flat JSON files are written to
    #[arg(long, env = "JANUS_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, env = "JANUS_TIMEOUT", default_value_t = 30)]
    timeout: u64,
}

#[derive(Clone, Copy)]
enum SourceChoice {
    HeadHunter,
    SuperJob,
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("janus=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = JsonFileStore::new(StoreConfig::new(&cli.data_dir));
    let service = SearchService::new(store);
    let timeout = Duration::from_secs(cli.timeout);

    run_menu(&service, timeout).await
}

async fn run_menu(service: &SearchService<JsonFileStore>, timeout: Duration) -> Result<()> {
    loop {
        println!();
        println!("Select a vacancy source:");
        println!("  1. HeadHunter");
        println!("  2. SuperJob");
        println!("  3. All sources");
        println!("  0. Exit");

        let choice = match prompt("Source number: ")?.as_str() {
            "0" => return Ok(()),
            "1" => SourceChoice::HeadHunter,
            "2" => SourceChoice::SuperJob,
            "3" => SourceChoice::All,
            other => {
                println!("'{other}' is not a menu option.");
                continue;
            }
        };

        let keyword = prompt("Search keyword: ")?;
        if keyword.is_empty() {
            println!("The keyword cannot be empty.");
            continue;
        }

        println!("Searching, this may take a while...");
        let records = match fetch(service, choice, &keyword, timeout).await {
            Ok(records) => records,
            Err(e) => {
                // A failed cycle ends here; nothing partial is reported.
                tracing::error!(error = %e, "fetch cycle aborted");
                if e.is_transport() {
                    println!("The vendor API could not be reached: {e}");
                } else {
                    println!("The search failed: {e}");
                }
                continue;
            }
        };

        if records.is_empty() {
            println!("No vacancies found, try another keyword.");
            continue;
        }
        println!("Found {} vacancies.", records.len());

        review_loop(&records)?;
    }
}

/// Run one fetch cycle for the chosen source(s).
///
/// Clients are constructed per cycle so a missing SuperJob credential only
/// surfaces when that vendor is actually selected.
async fn fetch(
    service: &SearchService<JsonFileStore>,
    choice: SourceChoice,
    keyword: &str,
    timeout: Duration,
) -> Result<Vec<VacancyRecord>, AppError> {
    match choice {
        SourceChoice::HeadHunter => {
            let hh = HeadHunterClient::with_timeout(timeout)?;
            service.search_source(&hh, keyword).await
        }
        SourceChoice::SuperJob => {
            let sj = SuperJobClient::from_env_with_timeout(timeout)?;
            service.search_source(&sj, keyword).await
        }
        SourceChoice::All => {
            let hh = HeadHunterClient::with_timeout(timeout)?;
            let sj = SuperJobClient::from_env_with_timeout(timeout)?;
            service.search_all(&hh, &sj, keyword).await
        }
    }
}

/// Filter-or-not branch over one cycle's records; loops until the user
/// goes back to source selection.
fn review_loop(records: &[VacancyRecord]) -> Result<()> {
    loop {
        println!();
        println!("  1. Filter vacancies");
        println!("  2. Show all vacancies");
        println!("  0. Back to source selection");

        match prompt("Action: ")?.as_str() {
            "0" => return Ok(()),
            "1" => {
                let criteria = prompt_criteria()?;
                let filtered = criteria.apply(records);
                if filtered.is_empty() {
                    println!("No vacancies matched the filter.");
                } else {
                    println!("Found {} vacancies after filtering:", filtered.len());
                    display(&filtered);
                }
            }
            "2" => display(records),
            other => println!("'{other}' is not a menu option."),
        }
    }
}

fn prompt_criteria() -> Result<FilterCriteria> {
    let city = prompt("City (blank for any): ")?;
    let salary_from = prompt_salary("Salary floor (blank for none): ")?;
    let salary_to = prompt_salary("Salary ceiling (blank for none): ")?;
    Ok(FilterCriteria::new(Some(city), salary_from, salary_to))
}

fn prompt_salary(label: &str) -> Result<Option<i64>> {
    loop {
        let input = prompt(label)?;
        if input.is_empty() {
            return Ok(None);
        }
        match input.parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("'{input}' is not a number, try again."),
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    if read == 0 {
        anyhow::bail!("stdin closed");
    }
    Ok(line.trim().to_string())
}

fn display(records: &[VacancyRecord]) {
    for record in records {
        println!();
        println!("Source:       {}", record.source);
        println!("Name:         {}", record.name);
        println!("City:         {}", record.city);
        println!("Salary:       {}", record.salary);
        println!("Requirements: {}", record.requirements);
        println!("URL:          {}", record.url);
    }
}
