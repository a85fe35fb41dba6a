//! # recall-cli
//!
//! Command-line interface for transcript recovery.
//!
//! ## Modes
//!
//! - `get-transcript --list` — List available transcripts
//! - `get-transcript --all --messages` — Full message history across transcripts
//! - `get-transcript --search <query>` — Keyword search by line
//! - `get-transcript --file <name>` — One transcript by name
//! - `get-transcript` — The current (most recent) transcript

pub mod commands;

pub use commands::Cli;
