//! # CogniGraph
//!
//! Command-line runner for the cognigraph-core entity graph.
//!
//! ## Usage
//!
//! ```bash
//! # Run the Neuron/Concept walkthrough
//! cognigraph demo
//!
//! # Execute an operation script
//! cognigraph run -f ops.json --config cognigraph.toml --json-mode
//! ```
//!
//! `COGNIGRAPH_LOG_FORMAT=json` switches log output to JSON lines;
//! `RUST_LOG` overrides the log filter.

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. `--verbose` lowers the default filter to `debug`.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("COGNIGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "cognigraph=debug,cognigraph_core=debug"
    } else {
        "cognigraph=info,cognigraph_core=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the CogniGraph startup banner.
fn print_banner() {
    println!(
        r#"
  CogniGraph v{}
  entities - relationships - plasticity
"#,
        env!("CARGO_PKG_VERSION")
    );
}
