//! Core types for Philagri.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod role;
pub mod status;

pub use id::*;
pub use price::{Peso, PesoError};
pub use role::{Role, Theme};
pub use status::*;
