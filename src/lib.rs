//! # touchline
//!
//! Leptos + WASM single-page front-end for soccer video review: a coach
//! keeps a library of match clips, plays one back, and pins time-stamped
//! notes ("markers") to it. Videos and markers live behind a small remote
//! HTTP API; this crate owns the UI state and nothing else.
//!
//! The crate splits into pages (layout and data orchestration), components
//! (the player panel, the video grid, the add-video form), plain state
//! models with their transitions, and a thin network layer.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
