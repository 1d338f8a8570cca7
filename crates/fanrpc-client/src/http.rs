//! HTTP broker implementation of [`ClusterClient`].
//!
//! The client delegates discovery, fan-out, and aggregation to a remote
//! broker, speaking JSON-RPC 2.0 over HTTP. Each round trip uses a fresh
//! connection and is bounded by the configured call timeout.

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Request;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use std::time::Duration;

use fanrpc_common::protocol::{
    CallArgs, FanrpcError, NodeReply, Result, DEFAULT_TIMEOUT_SECS,
};

use crate::client::ClusterClient;
use crate::wire::{
    DiscoverParams, InvokeParams, JsonRpcRequest, JsonRpcResponse, METHOD_DISCOVER, METHOD_INVOKE,
};

/// Validates that a URL string starts with http:// or https://
fn validate_http_url(url: &str, description: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(FanrpcError::Transport(format!(
            "invalid {}: '{}' must start with http:// or https://",
            description, url
        )))
    }
}

/// Cluster client backed by a JSON-RPC broker.
///
/// Created for one agent. Progress reporting defaults to on for interactive
/// use; the adapter disables it before dispatch.
pub struct HttpClusterClient {
    broker_url: String,
    agent: String,
    timeout: Duration,
    progress: bool,
    identity: Option<String>,
}

impl HttpClusterClient {
    /// Creates a client for `agent` against the broker at `broker_url`.
    pub fn new(broker_url: impl Into<String>, agent: impl Into<String>) -> Result<Self> {
        let broker_url = broker_url.into();
        validate_http_url(&broker_url, "broker address")?;
        Ok(HttpClusterClient {
            broker_url,
            agent: agent.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            progress: true,
            identity: None,
        })
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Sends one JSON-RPC request and unwraps the result member.
    ///
    /// Each request creates its own HTTP connection; the whole round trip is
    /// bounded by the configured timeout.
    async fn post(&self, request: &JsonRpcRequest) -> Result<Value> {
        let body = serde_json::to_vec(request)?;

        let http_request = Request::builder()
            .method("POST")
            .uri(&self.broker_url)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| FanrpcError::Transport(format!("failed to build request: {}", e)))?;

        let client = Client::builder(TokioExecutor::new()).build_http();
        let response = tokio::time::timeout(self.timeout, client.request(http_request))
            .await
            .map_err(|_| FanrpcError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| FanrpcError::Transport(format!("HTTP request failed: {}", e)))?;

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| FanrpcError::Transport(format!("failed to read response: {}", e)))?
            .to_bytes();

        let response: JsonRpcResponse = serde_json::from_slice(&body)
            .map_err(|e| FanrpcError::InvalidResponse(format!("broker sent invalid JSON-RPC: {}", e)))?;

        if let Some(error) = response.error {
            return Err(FanrpcError::RemoteCall(error.message));
        }
        response
            .result
            .ok_or_else(|| FanrpcError::InvalidResponse("response missing result".to_string()))
    }
}

#[async_trait]
impl ClusterClient for HttpClusterClient {
    fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    fn set_progress(&mut self, enabled: bool) {
        self.progress = enabled;
    }

    fn identity_filter(&mut self, identity: &str) {
        self.identity = Some(identity.to_string());
    }

    async fn discover(&mut self) -> Result<Vec<String>> {
        let params = serde_json::to_value(DiscoverParams {
            agent: self.agent.clone(),
        })?;
        let result = self.post(&JsonRpcRequest::new(METHOD_DISCOVER, params)).await?;
        let identities: Vec<String> = serde_json::from_value(result)
            .map_err(|e| FanrpcError::InvalidResponse(format!("bad discovery result: {}", e)))?;

        tracing::debug!(agent = %self.agent, nodes = identities.len(), "discovery complete");
        if self.progress {
            eprintln!("discovered {} nodes offering {}", identities.len(), self.agent);
        }
        Ok(identities)
    }

    async fn invoke(&mut self, action: &str, args: CallArgs) -> Result<Vec<NodeReply>> {
        let params = serde_json::to_value(InvokeParams {
            agent: self.agent.clone(),
            action: action.to_string(),
            arguments: args,
            timeout_secs: self.timeout.as_secs(),
            identity: self.identity.clone(),
        })?;
        let result = self.post(&JsonRpcRequest::new(METHOD_INVOKE, params)).await?;
        let replies: Vec<NodeReply> = serde_json::from_value(result)
            .map_err(|e| FanrpcError::InvalidResponse(format!("bad invoke result: {}", e)))?;

        tracing::debug!(action, replies = replies.len(), "invoke complete");
        Ok(replies)
    }
}
