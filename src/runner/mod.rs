//! The runner is responsible for loading accounts from CSV into a [`Bank`](crate::Bank),
//! answering lookup queries read from a second CSV, and writing the results to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::{run as run_async, run_with as run_async_with};
pub use sync_runner::{run, run_with};
