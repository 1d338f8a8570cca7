use async_trait::async_trait;
use std::time::Duration;

use fanrpc_common::protocol::{CallArgs, NodeReply, Result};

/// Interface to the cluster RPC fabric.
///
/// A client is created for one agent and dispatches exactly one call.
/// Discovery, fan-out, per-node timeout enforcement, and response aggregation
/// all belong to the implementation; callers only choose the targeting mode
/// (full discovery or a single identity) and invoke the action.
///
/// Implementations must return replies in the order the cluster produced
/// them; callers rely on that order when printing results.
#[async_trait]
pub trait ClusterClient {
    /// Sets the upper bound on call completion.
    fn set_timeout(&mut self, timeout: Duration);

    /// Enables or disables interactive progress reporting.
    fn set_progress(&mut self, enabled: bool);

    /// Restricts the call to one node identity instead of discovering.
    fn identity_filter(&mut self, identity: &str);

    /// Locates all nodes currently offering the agent.
    async fn discover(&mut self) -> Result<Vec<String>>;

    /// Invokes the named action with the translated arguments and returns
    /// the ordered per-node replies.
    async fn invoke(&mut self, action: &str, args: CallArgs) -> Result<Vec<NodeReply>>;
}
