// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The derive API turns the struct below into a full argument parser,
// including --help and --version.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "redirect-audit",
    version,
    about = "Clean a redirect CSV, find loops and chains, and check that destinations are live",
    long_about = "redirect-audit reads a two-column CSV of redirects (source, destination), \
                  removes duplicates, reports redirect loops and chains, and writes a cleaned CSV. \
                  With --validate it also requests every destination and writes the ones that \
                  don't answer 200 to an error report."
)]
pub struct Cli {
    /// CSV file with source,destination rows (no header)
    ///
    /// This is a positional argument (required, no flag needed)
    pub input: PathBuf,

    /// Request every destination URL and report the ones that don't return 200
    #[arg(long)]
    pub validate: bool,

    /// Maximum number of destination checks running at once
    #[arg(long, default_value_t = 5)]
    pub concurrency: usize,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub timeout_ms: u64,

    /// Pause before each request in milliseconds, to go easy on the target host
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Directory for cleaned.csv and redirect-errors.csv
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Print the full report as JSON after the run
    #[arg(long)]
    pub json: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
