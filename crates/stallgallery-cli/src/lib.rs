//! Stall Gallery command-line tooling
//!
//! The binary lives in `main.rs`; the HTTP server is exposed here so it can
//! be exercised from integration tests.

pub mod server;
