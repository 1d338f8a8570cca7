//! The request pipeline: read, parse, validate, dispatch, print.

use std::io::Read;

use fanrpc_client::{ClusterClient, HttpClusterClient};
use fanrpc_common::protocol::{Call, NodeReply, Result, RpcRequest};

/// Environment variable naming the broker endpoint.
pub const BROKER_ENV: &str = "FANRPC_BROKER";

/// Broker endpoint used when [`BROKER_ENV`] is not set.
pub const DEFAULT_BROKER: &str = "http://127.0.0.1:8080";

/// Argument selecting standard input.
pub const STDIN_MARKER: &str = "-";

/// Resolves the broker endpoint from the environment.
pub fn broker_url() -> String {
    std::env::var(BROKER_ENV).unwrap_or_else(|_| DEFAULT_BROKER.to_string())
}

/// Reads the raw request bytes from stdin (`-`) or the named file.
pub fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == STDIN_MARKER {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(input)?)
    }
}

/// Runs the dispatch sequence for one validated call.
///
/// Progress reporting is disabled and the timeout applied before any network
/// activity. A supplied identity restricts the call to that node with no
/// discovery; otherwise the full roster is discovered first. Replies come
/// back in whatever order the client produced them.
pub async fn dispatch<C: ClusterClient>(client: &mut C, call: Call) -> Result<Vec<NodeReply>> {
    client.set_progress(false);
    client.set_timeout(call.timeout);
    match &call.identity {
        Some(identity) => client.identity_filter(identity),
        None => {
            client.discover().await?;
        }
    }
    client.invoke(&call.action, call.args).await
}

/// Parses, validates, dispatches, and prints one request.
///
/// The full response set is printed once, as a single JSON array on stdout.
pub async fn run(input: &str) -> Result<()> {
    let bytes = read_input(input)?;
    let call = RpcRequest::from_slice(&bytes)?.into_call()?;
    tracing::debug!(agent = %call.agent, action = %call.action, "dispatching");

    let mut client = HttpClusterClient::new(broker_url(), call.agent.as_str())?;
    let replies = dispatch(&mut client, call).await?;

    println!("{}", serde_json::to_string(&replies)?);
    Ok(())
}
