//! This example generates an accounts CSV file with a number of accounts
//! supplied as a command-line argument, in shuffled order.
//!
//! The CSV file can then be used with the `lookup` command of `rusty-lookup`.
//!
//! Example (100 accounts):
//! ```bash
//! cargo run --example generator 100 > data/100_accounts.csv
//! ```
//! ### Balances
//! Account number `n` gets a balance of `BASE_BALANCE * (n % BALANCE_CYCLE)`,
//! so the expected balance of any account in a lookup result can be derived
//! from its number alone.
//!

use csv::Writer;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_lookup::Account;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // Get command-line arguments
    let args: Vec<String> = env::args().collect();

    // Ensure we have the correct number of arguments
    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }

    // Parse the number of accounts from the first argument
    let num_accounts: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_accounts> must be a positive integer.");
            std::process::exit(1);
        }
    };

    const BASE_BALANCE: Decimal = dec!(12.5);
    const BALANCE_CYCLE: u32 = 1000;

    let mut numbers: Vec<u32> = (0..num_accounts).collect();
    numbers.shuffle(&mut rand::thread_rng());

    let mut wtr = Writer::from_writer(std::io::stdout());
    for n in numbers {
        let balance = BASE_BALANCE * Decimal::from(n % BALANCE_CYCLE);
        wtr.serialize(Account::with_balance(format!("{:010}", n), balance))?;
    }
    wtr.flush()?;
    Ok(())
}
