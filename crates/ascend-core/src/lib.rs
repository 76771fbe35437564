//! Ascend Core
//!
//! Shared utilities for the Ascend crates: hash collections, logging setup and
//! profiling scopes.

pub mod alloc;
pub mod logging;
pub mod profiling;
