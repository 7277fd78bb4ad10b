mod bank;
mod csv_utils;
mod dto;
mod error;
mod runner;
mod simulation;
mod stores;

pub use bank::Bank;
pub use dto::{Account, LookupRow, Query};
pub use error::Error;
pub use runner::{run, run_async, run_async_with, run_with};
pub use simulation::{
    simulate, SimulationConfig, SimulationReport, TimedLookup, MISSING_ACCOUNT,
};
pub use stores::{AccountStorage, BinarySearchStore, HashStore, Lookup};
