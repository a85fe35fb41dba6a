//! # recall-core
//!
//! Core types and primitives for transcript recovery.
//! This crate defines the shared vocabulary used by every other crate in the workspace.

pub mod error;
pub mod message;
pub mod types;

pub use error::{RecallError, Result};
pub use message::{Message, Role, truncate_chars};
pub use types::*;
