//! Glint Core
//!
//! Shared utilities for the Glint UI crates: logging, profiling, math,
//! collections, timing and engine-level configuration.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;
pub mod time;

pub use config::{Config, ProfilingMode};
