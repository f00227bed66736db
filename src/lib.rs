//! Calc Server - a stateless arithmetic computation service
//!
//! Computes add/subtract/multiply/divide over two operands and memoizes
//! results under canonical cache keys with TTL expiration.

pub mod api;
pub mod cache;
pub mod calc;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_purge_task;
