pub mod api;
pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod resolver;
pub mod serve_stats;
pub mod signer;
