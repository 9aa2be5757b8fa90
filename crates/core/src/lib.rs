//! Philagri Core - Shared domain types.
//!
//! This crate provides the types used across all Philagri components:
//! - `web` - Server-rendered farm management and marketplace dashboards
//! - `cli` - Command-line inspection of the seed store and route table
//!
//! # Architecture
//!
//! The core crate contains only types and their pure rules - no I/O, no HTTP,
//! no seed data. Status transition tables live here so every view and the CLI
//! enforce the same lifecycle.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, peso amounts, statuses, roles and themes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
