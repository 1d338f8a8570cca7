pub mod client;
pub mod http;
pub mod wire;

pub use client::ClusterClient;
pub use http::HttpClusterClient;
