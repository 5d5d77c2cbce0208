//! hh-checks - integration checks for the public hh.ru job-search API
//!
//! Runs the full suite sequentially, prints per-case results, writes an
//! HTML report, and exits non-zero if any case failed.

use std::path::PathBuf;

use clap::Parser;
use hh_api_checks::api::ApiClient;
use hh_api_checks::common::{logging, Config};
use hh_api_checks::schema::SchemaStore;
use hh_api_checks::suite::{self, CaseContext};

#[derive(Parser)]
#[command(name = "hh-checks", about = "Integration checks for the public hh.ru job-search API")]
#[command(version, long_about = None)]
struct Cli {
    /// Base URL of the API under test
    #[arg(long)]
    base_url: Option<String>,

    /// Directory holding the JSON schema files
    #[arg(long)]
    schema_dir: Option<PathBuf>,

    /// Directory the HTML report is written into
    #[arg(long)]
    report_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(schema_dir) = cli.schema_dir {
        config.schema_dir = schema_dir;
    }
    if let Some(report_dir) = cli.report_dir {
        config.report_dir = report_dir;
    }

    let started_at = chrono::Local::now();
    let ctx = CaseContext {
        client: ApiClient::new(config.base_url),
        schemas: SchemaStore::new(config.schema_dir),
    };

    let cases = suite::cases::all();
    let results = suite::run_suite(&ctx, &cases).await;
    let summary = suite::RunSummary::of(&results);
    suite::print_summary(&summary);

    match suite::report::write_report(&config.report_dir, &results, started_at) {
        Ok(path) => println!("Report written to {}", path.display()),
        Err(e) => {
            eprintln!("Error: failed to write report: {e}");
            std::process::exit(2);
        }
    }

    if !summary.all_passed() {
        std::process::exit(1);
    }
}
