//! Shared utilities for the linked value expression engine
//!
//! This crate holds the pieces that every other `linkval_*` crate agrees on:
//! source spans into an expression, the diagnostic representation used for
//! rendering problems to users, and the [`StatusMessage`](status::StatusMessage)
//! record that the engine hands back instead of failing.

pub mod error;
pub mod span;
pub mod status;
