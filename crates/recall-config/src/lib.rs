//! # recall-config
//!
//! Configuration for transcript recovery. Reads from `recall.toml`, environment
//! variables, and CLI overrides — in that precedence order.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::RecallConfig;
pub use schema::{ConfigWarning, WarningSeverity};
