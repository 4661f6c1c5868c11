// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and validate them
// 2. Read the redirect CSV, normalize + deduplicate, find loops and chains
// 3. Write the cleaned CSV and print the issues
// 4. Optionally check every destination and write the error report
// 5. Exit with proper code (0 = clean, 1 = issues/errors found, 2 = error)
//
// Rust concepts used:
// - async/await: Because destination checks run concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod analysis; // src/analysis/ - normalization, dedup, loop/chain detection
mod checker;  // src/checker/ - destination liveness checks
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - validated run configuration
mod error;    // src/error.rs - fatal error types
mod report;   // src/report/ - report assembly and CSV I/O

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use checker::{LinkValidator, StatusOutcome, ValidationResult};
use cli::Cli;
use config::AuditConfig;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Fatal errors (missing input, bad flags, unwritable output) exit with 2
            eprintln!("❌ Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no issues and every checked destination returned 200
//   Ok(1) = loops/chains found or some destinations failed
//   Err   = fatal error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AuditConfig::try_from(cli)?;

    let records = report::read_records(&config.input_path)?;

    println!("🔍 Checking {} redirect(s) for issues...", records.len());

    let pairs = analysis::ingest(records);
    let findings = analysis::analyze(pairs);

    let mut run_report = report::assemble(&findings.filtered, &findings.issues, None);

    let cleaned_path = config.cleaned_path();
    report::write_cleaned(&cleaned_path, &run_report.cleaned_rows)
        .with_context(|| format!("Failed to write {}", cleaned_path.display()))?;
    println!(
        "✅ Cleaned CSV saved to: {} ({} row(s))",
        cleaned_path.display(),
        run_report.cleaned_rows.len()
    );

    print_issues(&run_report.issues);

    if config.validate_destinations {
        let results = validate_destinations(&config, &findings.filtered).await?;
        run_report = report::assemble(&findings.filtered, &findings.issues, Some(results.as_slice()));

        if run_report.error_rows.is_empty() {
            println!("\n✅ All destinations returned 200!");
        } else {
            let errors_path = config.errors_path();
            report::write_errors(&errors_path, &run_report.error_rows)
                .with_context(|| format!("Failed to write {}", errors_path.display()))?;
            println!(
                "\n❌ {} error(s) written to: {}",
                run_report.error_rows.len(),
                errors_path.display()
            );
        }
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&run_report)?);
    }

    if run_report.is_clean() {
        Ok(0)
    } else {
        Ok(1)
    }
}

async fn validate_destinations(
    config: &AuditConfig,
    pairs: &[analysis::NormalizedPair],
) -> Result<Vec<ValidationResult>> {
    let validator = LinkValidator::new(config.validator.clone())?;
    let options = validator.options();

    println!(
        "\n🌐 Validating {} destination(s) ({} at a time, {}ms timeout)...\n",
        pairs.len(),
        options.concurrency,
        options.timeout.as_millis()
    );

    let results = validator.validate(pairs).await;
    print_table(&results);

    Ok(results)
}

fn print_issues(issues: &[analysis::Issue]) {
    if issues.is_empty() {
        println!("🎉 No issues found!");
        return;
    }

    println!("\n--- Issues Found ---");
    for issue in issues {
        println!("⚠️  {}", issue);
    }
}

// Prints validation results as a human-readable table in the terminal
fn print_table(results: &[ValidationResult]) {
    println!("{:<40} {:<50} {:<15}", "SOURCE", "DESTINATION", "STATUS");
    println!("{}", "=".repeat(105));

    for result in results {
        println!(
            "{:<40} {:<50} {:<15}",
            truncate(&result.source_url, 37),
            truncate(&result.destination_url, 47),
            format_status(&result.status)
        );
    }

    println!();

    let ok_count = results.iter().filter(|r| r.is_ok()).count();
    let invalid_count = results
        .iter()
        .filter(|r| r.status == StatusOutcome::InvalidUrl)
        .count();

    println!("📊 Summary:");
    println!("   ✅ OK: {}", ok_count);
    println!("   ❌ Failed: {}", results.len() - ok_count - invalid_count);
    println!("   ⏩ Skipped (invalid URL): {}", invalid_count);
    println!("   📋 Total: {}", results.len());
}

// Truncates on a char boundary so multi-byte URLs don't panic
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn format_status(status: &StatusOutcome) -> String {
    match status {
        StatusOutcome::Code(200) => "✅ 200".to_string(),
        StatusOutcome::Code(code) if (300..400).contains(code) => format!("🔀 {}", code),
        StatusOutcome::Code(code) => format!("❌ {}", code),
        StatusOutcome::Timeout => "⏱️  timeout".to_string(),
        StatusOutcome::Error => "⚠️  error".to_string(),
        StatusOutcome::InvalidUrl => "⏩ invalid-url".to_string(),
    }
}

// Logs go to stderr so they never mix with the table or --json output.
// REDIRECT_AUDIT_LOG overrides the filter, REDIRECT_AUDIT_LOG_FORMAT=json
// switches to JSON lines.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("REDIRECT_AUDIT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "redirect_audit=debug,warn"
        } else {
            "redirect_audit=warn"
        })
    });

    let format = env::var("REDIRECT_AUDIT_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}
