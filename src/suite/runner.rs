//! Sequential case executor
//!
//! Runs every case to completion in order and reports structured results.
//! A failed or errored case never stops the rest of the run; its message is
//! kept for the console line and the HTML report.

use std::time::{Duration, Instant};

use colored::Colorize;

use super::cases::{Case, CaseContext};

/// Result of one executed case
#[derive(Debug)]
pub struct CaseResult {
    pub name: &'static str,
    pub description: &'static str,
    pub passed: bool,
    pub error: Option<String>,
    pub duration: Duration,
}

/// Pass/fail counts over a finished run
#[derive(Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn of(results: &[CaseResult]) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Execute the cases one after another, printing a line per case.
pub async fn run_suite(ctx: &CaseContext, cases: &[Case]) -> Vec<CaseResult> {
    println!(
        "\n{} {} cases against {}",
        "Running:".blue().bold(),
        cases.len(),
        ctx.client.base_url().white().bold()
    );

    let mut results = Vec::with_capacity(cases.len());
    for case in cases {
        let started = Instant::now();
        let outcome = case.run(ctx).await;
        let duration = started.elapsed();

        match outcome {
            Ok(()) => {
                println!("  {} {}", "✓".green(), case.name.dimmed());
                results.push(CaseResult {
                    name: case.name,
                    description: case.description,
                    passed: true,
                    error: None,
                    duration,
                });
            }
            Err(e) => {
                println!("  {} {}: {}", "✗".red(), case.name, e);
                results.push(CaseResult {
                    name: case.name,
                    description: case.description,
                    passed: false,
                    error: Some(e.to_string()),
                    duration,
                });
            }
        }
    }
    results
}

/// Print the run summary in the same style as the per-case lines.
pub fn print_summary(summary: &RunSummary) {
    if summary.all_passed() {
        println!(
            "\n{} {} ({} cases)\n",
            "✓".green().bold(),
            "All checks passed".green().bold(),
            summary.total
        );
    } else {
        println!(
            "\n{} {} ({} of {} cases failed)\n",
            "✗".red().bold(),
            "Checks failed".red().bold(),
            summary.failed,
            summary.total
        );
    }
}
