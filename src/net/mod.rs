//! Wire types and HTTP client for the remote video/analysis API.

pub mod api;
pub mod types;
