//! Foundation types for MIRAGE_TERM.
//!
//! This crate contains the host-agnostic core types shared by all MIRAGE_TERM
//! crates: key-chord input events, scrollback line roles, and error types.

pub mod error;
pub mod input;
pub mod line;
