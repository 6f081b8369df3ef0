//! # refcert-cli — Operator Tool for the Certification Core
//!
//! Provides the `refcert` command-line interface over `refcert-core`.
//!
//! ## Subcommands
//!
//! - `refcert id` — mint, inspect, and bridge typed identifiers.
//! - `refcert cert` — build certification sets, sort and compare them.
//!
//! ```bash
//! refcert id new user --count 3
//! refcert id inspect attempt_01HF7YAT00000000000000001A
//! refcert id from-legacy user 1234
//! refcert cert list head/twentyfour flag/twentytwo
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` operational error, `2` rejected input (malformed
//! identifier or certification).

pub mod cert;
pub mod config;
pub mod id;
pub mod output;

/// Exit code for input the core rejected.
pub const EXIT_REJECTED: u8 = 2;
