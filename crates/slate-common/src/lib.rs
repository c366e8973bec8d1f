//! Common utilities for the slate markup parser.
//!
//! This crate provides shared infrastructure used by the parser crates:
//! - **Warning System** - colored, deduplicated stderr output for input that
//!   parses but is probably not what the author meant

pub mod warning;
