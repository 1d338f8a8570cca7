//! JSON-RPC 2.0 wire types spoken to the broker.
//!
//! The broker exposes two methods:
//! - `discover`: params [`DiscoverParams`], result an array of identity strings
//! - `invoke`: params [`InvokeParams`], result an array of per-node reply records
//!
//! Standard JSON-RPC 2.0 framing applies: requests carry `jsonrpc: "2.0"`,
//! a method name, params, and an id; responses echo the id with either a
//! `result` or an `error` member.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use fanrpc_common::protocol::CallArgs;

/// Broker method locating nodes that offer an agent.
pub const METHOD_DISCOVER: &str = "discover";
/// Broker method dispatching an action and aggregating replies.
pub const METHOD_INVOKE: &str = "invoke";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates a process-unique request id.
///
/// Upper 32 bits come from the wall clock, lower 32 from an atomic counter,
/// so ids stay unique even when the clock is unavailable.
fn next_request_id() -> u64 {
    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    (timestamp & 0xFFFFFFFF00000000) | (counter & 0xFFFFFFFF)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
    pub id: Value,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: Value) -> Self {
        JsonRpcRequest {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            id: Value::from(next_request_id()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub result: Option<Value>,
    pub error: Option<JsonRpcError>,
    pub id: Value,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".into(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Value, error: JsonRpcError) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".into(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Application-defined broker failure (-32000).
    pub fn server_error(msg: impl Into<String>) -> Self {
        JsonRpcError {
            code: -32000,
            message: msg.into(),
            data: None,
        }
    }

    /// The broker does not expose the requested method (-32601).
    pub fn method_not_found() -> Self {
        JsonRpcError {
            code: -32601,
            message: "Method not found".into(),
            data: None,
        }
    }
}

/// Params for [`METHOD_DISCOVER`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverParams {
    pub agent: String,
}

/// Params for [`METHOD_INVOKE`].
///
/// `identity: None` asks the broker to fan out to every node offering the
/// agent; `Some(id)` restricts the call to that one node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeParams {
    pub agent: String,
    pub action: String,
    pub arguments: CallArgs,
    pub timeout_secs: u64,
    pub identity: Option<String>,
}
