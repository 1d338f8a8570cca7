//! # fanrpc CLI
//!
//! Command-line adapter that reads one JSON request, dispatches it into the
//! cluster RPC fabric, and prints the per-node results as a JSON array.
//!
//! The binary lives in `main.rs`; the request pipeline (input resolution,
//! parsing, dispatch, output) lives in [`adapter`] so it can be exercised
//! against a mock cluster client.

pub mod adapter;
