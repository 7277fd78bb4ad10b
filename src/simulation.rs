//! Timed load-then-lookup run over synthetic accounts.
//!
//! Generates `accounts` zero-padded 10-digit account numbers, shuffles them,
//! opens them all in a [`Bank`] backed by a [`BinarySearchStore`], sorts, and
//! then times lookups of the first and last shuffled numbers and of a number
//! that was never opened.

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::time::{Duration, Instant};

use crate::stores::BinarySearchStore;
use crate::{Bank, Error};

/// Never generated: numbers run from `0000000000` up to `accounts - 1`.
pub const MISSING_ACCOUNT: &str = "9999999999";

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub accounts: u32,
    /// Fixed shuffle seed, or `None` for a random one
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            accounts: 1_000_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedLookup {
    pub number: String,
    pub found: bool,
    pub probes: u32,
    pub elapsed: Duration,
}

impl fmt::Display for TimedLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.found { "found" } else { "NOT FOUND" };
        write!(
            f,
            "{} {} in {} probes, took {} nanoseconds",
            self.number,
            outcome,
            self.probes,
            self.elapsed.as_nanos()
        )
    }
}

#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub accounts: usize,
    pub load: Duration,
    pub sort: Duration,
    pub first: TimedLookup,
    pub last: TimedLookup,
    pub missing: TimedLookup,
}

impl SimulationReport {
    pub fn log(&self) {
        info!(
            "loaded {} accounts in {} milliseconds",
            self.accounts,
            self.load.as_millis()
        );
        info!("sorted in {} milliseconds", self.sort.as_millis());
        info!("first: {}", self.first);
        info!("last: {}", self.last);
        info!("missing: {}", self.missing);
    }
}

/// Zero-padded 10-digit account numbers `0..count` in ascending order.
pub fn generate_numbers(count: u32) -> Vec<String> {
    (0..count).map(|i| format!("{:010}", i)).collect()
}

pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, Error> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut numbers = generate_numbers(config.accounts);
    numbers.shuffle(&mut rng);

    let first = numbers.first().cloned().unwrap_or_default();
    let last = numbers.last().cloned().unwrap_or_default();

    let mut bank = Bank::new(BinarySearchStore::with_capacity(numbers.len()));
    let start = Instant::now();
    for number in numbers {
        bank.add_account(number);
    }
    let load = start.elapsed();

    let start = Instant::now();
    bank.prepare();
    let sort = start.elapsed();

    Ok(SimulationReport {
        accounts: bank.len(),
        load,
        sort,
        first: timed_lookup(&bank, &first)?,
        last: timed_lookup(&bank, &last)?,
        missing: timed_lookup(&bank, MISSING_ACCOUNT)?,
    })
}

fn timed_lookup(bank: &Bank<BinarySearchStore>, number: &str) -> Result<TimedLookup, Error> {
    let start = Instant::now();
    let lookup = bank.storage().locate(number)?;
    let elapsed = start.elapsed();
    Ok(TimedLookup {
        number: number.to_owned(),
        found: lookup.index.is_some(),
        probes: lookup.probes,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_numbers() {
        assert_eq!(
            generate_numbers(3),
            vec!["0000000000", "0000000001", "0000000002"]
        );
        assert!(generate_numbers(0).is_empty());
    }

    #[test]
    fn test_missing_account_is_never_generated() {
        // The largest number any u32 count can produce sorts below it
        let largest = format!("{:010}", u32::MAX - 1);
        assert!(largest.as_str() < crate::MISSING_ACCOUNT);
        assert_eq!(crate::MISSING_ACCOUNT, MISSING_ACCOUNT);
    }

    #[test]
    fn test_simulate_finds_first_and_last() {
        let report = simulate(&SimulationConfig {
            accounts: 10_000,
            seed: Some(7),
        })
        .unwrap();

        assert_eq!(report.accounts, 10_000);
        assert!(report.first.found);
        assert!(report.last.found);
        assert!(!report.missing.found);
        assert_eq!(report.missing.number, MISSING_ACCOUNT);
        // floor(log2(10_000)) + 1
        for lookup in [&report.first, &report.last, &report.missing] {
            assert!(lookup.probes <= 14, "{}", lookup);
        }
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let config = SimulationConfig {
            accounts: 1_000,
            seed: Some(1234),
        };
        let a = simulate(&config).unwrap();
        let b = simulate(&config).unwrap();
        assert_eq!(a.first.number, b.first.number);
        assert_eq!(a.last.number, b.last.number);
    }

    #[test]
    fn test_simulate_without_accounts() {
        let report = simulate(&SimulationConfig {
            accounts: 0,
            seed: Some(1),
        })
        .unwrap();
        assert_eq!(report.accounts, 0);
        assert!(!report.first.found);
        assert!(!report.missing.found);
    }

    #[test]
    fn test_timed_lookup_display() {
        let lookup = TimedLookup {
            number: MISSING_ACCOUNT.to_string(),
            found: false,
            probes: 20,
            elapsed: Duration::from_nanos(150),
        };
        assert_eq!(
            lookup.to_string(),
            "9999999999 NOT FOUND in 20 probes, took 150 nanoseconds"
        );
    }
}
