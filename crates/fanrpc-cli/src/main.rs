//! # fanrpc Entry Point
//!
//! Reads a JSON object describing one cluster RPC request and prints the
//! per-node results as a JSON array.
//!
//! ## Usage
//!
//! ```bash
//! # Dispatch a request file
//! fanrpc request.json
//!
//! # Read the request from standard input
//! echo '{"agent":"svc","action":"status"}' | fanrpc -
//!
//! # Pipe results into jq
//! fanrpc request.json | jq '.[].data'
//! ```
//!
//! The broker endpoint comes from the `FANRPC_BROKER` environment variable
//! (default `http://127.0.0.1:8080`) and must include the `http://` or
//! `https://` prefix.
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Call dispatched and results printed |
//! | 1    | Usage error or unreadable input file |
//! | 2    | Input did not parse as a JSON object |
//! | 3    | Required `agent`/`action` field absent or empty |
//! | 4    | Remote failure (broker, transport, timeout) |

use argh::FromArgs;

/// dispatch a JSON RPC request to the cluster and print per-node results
#[derive(FromArgs)]
struct Cli {
    /// request file to read, or "-" for standard input
    #[argh(positional)]
    input: String,
}

#[tokio::main]
async fn main() {
    let cli: Cli = argh::from_env();

    // Logs go to stderr so stdout stays clean for unix tool usage
    // (piping to jq, etc.). Default level WARN, RUST_LOG overrides.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = fanrpc_cli::adapter::run(&cli.input).await {
        eprintln!("fanrpc: {}", e);
        std::process::exit(e.exit_code());
    }
}
