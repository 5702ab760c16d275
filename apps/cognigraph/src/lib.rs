//! # CogniGraph application library
//!
//! Shared pieces of the `cognigraph` binary, exposed for integration tests:
//! - `settings`: TOML loading of [`GraphConfig`](cognigraph_core::GraphConfig)
//! - `script`: JSON operation scripts and their query output

pub mod script;
pub mod settings;
