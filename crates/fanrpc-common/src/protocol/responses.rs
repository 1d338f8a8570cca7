//! Per-node reply records.
//!
//! A dispatched call produces one [`NodeReply`] per responding node. The
//! cluster client returns them as an ordered sequence, and the adapter prints
//! that sequence verbatim as a JSON array.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Node status codes carried in `statuscode`.
/// The action ran to completion
pub const STATUS_OK: i32 = 0;
/// The action aborted before completing
pub const STATUS_ABORTED: i32 = 1;
/// The node does not implement the requested action
pub const STATUS_UNKNOWN_ACTION: i32 = 2;
/// A required argument was missing
pub const STATUS_MISSING_DATA: i32 = 3;
/// An argument failed the node's own validation
pub const STATUS_INVALID_DATA: i32 = 4;
/// The node failed in an unclassified way
pub const STATUS_UNKNOWN_ERROR: i32 = 5;

/// One node's response to a dispatched action.
///
/// # Fields
///
/// - `sender`: identity of the responding node
/// - `statuscode`: one of the `STATUS_*` constants
/// - `statusmsg`: human-readable status
/// - `data`: action-specific payload, `null` when the node sent none
///
/// # Example
///
/// ```
/// use fanrpc_common::protocol::responses::NodeReply;
/// use serde_json::json;
///
/// let reply = NodeReply::ok("node-a", json!({"uptime": 12}));
/// assert!(reply.succeeded());
///
/// let failed = NodeReply::error("node-b", 2, "unknown action");
/// assert!(!failed.succeeded());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeReply {
    /// Identity of the responding node
    pub sender: String,
    /// Status code for this node's attempt
    pub statuscode: i32,
    /// Human-readable status message
    pub statusmsg: String,
    /// Action-specific payload
    #[serde(default)]
    pub data: Value,
}

impl NodeReply {
    /// Creates a successful reply.
    pub fn ok(sender: impl Into<String>, data: Value) -> Self {
        NodeReply {
            sender: sender.into(),
            statuscode: STATUS_OK,
            statusmsg: "OK".to_string(),
            data,
        }
    }

    /// Creates a failed reply.
    pub fn error(sender: impl Into<String>, statuscode: i32, statusmsg: impl Into<String>) -> Self {
        NodeReply {
            sender: sender.into(),
            statuscode,
            statusmsg: statusmsg.into(),
            data: Value::Null,
        }
    }

    /// Whether this node completed the action.
    pub fn succeeded(&self) -> bool {
        self.statuscode == STATUS_OK
    }
}
