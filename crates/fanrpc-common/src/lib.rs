//! fanrpc Common Types
//!
//! This crate provides the protocol types shared by the fanrpc client and CLI.
//!
//! # Overview
//!
//! fanrpc dispatches a single JSON-described RPC request into a cluster fabric
//! and prints the per-node results. This crate contains the pieces both sides
//! of that flow agree on:
//!
//! - **Request envelope**: the [`protocol::RpcRequest`] shape read from stdin
//!   or a file, and the validated [`protocol::Call`] it turns into
//! - **Argument keys**: plain and symbolic keys ([`protocol::ArgKey`]), with
//!   the reserved `_SYM_` prefix translation
//! - **Replies**: one [`protocol::NodeReply`] per responding node, printed in
//!   the order the cluster returned them
//! - **Errors**: the [`protocol::FanrpcError`] taxonomy and its process
//!   exit-code mapping
//!
//! # Example
//!
//! ```
//! use fanrpc_common::protocol::RpcRequest;
//!
//! let request = RpcRequest::from_slice(
//!     br#"{"agent":"svc","action":"status","arguments":{"_SYM_mode":"fast"}}"#,
//! ).unwrap();
//! let call = request.into_call().unwrap();
//! assert_eq!(call.agent, "svc");
//! assert!(call.args[0].key.is_symbol());
//! ```

pub mod protocol;

pub use protocol::*;
