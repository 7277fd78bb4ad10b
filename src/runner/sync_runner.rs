use log::{debug, warn};
use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    csv_utils::{read_csv, write_csv},
    dto::{Account, LookupRow, Query},
    stores::{AccountStorage, BinarySearchStore},
    Bank,
};

/// Runs the lookup on the given accounts and queries files using a
/// [`BinarySearchStore`], writing one result row per query to the provided writer.
///
/// # Arguments
/// * `accounts_path` - Path to the CSV file with the accounts to load
/// * `queries_path` - Path to the CSV file with the account numbers to look up
/// * `writer` - Where to write the lookup results (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * Either input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, Q, W>(accounts_path: P, queries_path: Q, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    run_with(BinarySearchStore::new(), accounts_path, queries_path, writer)
}

/// Same as [`run`], with the accounts held in the given storage.
pub fn run_with<S, P, Q, W>(
    storage: S,
    accounts_path: P,
    queries_path: Q,
    writer: W,
) -> Result<(), Box<dyn Error>>
where
    S: AccountStorage,
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    let mut bank = Bank::new(storage);

    for account in read_csv::<Account, _>(accounts_path)? {
        // CSV parsing errors are critical - propagate them
        let account = account?;
        // Duplicate accounts are skipped, the first one wins
        if let Err(err) = bank.open_account(account) {
            warn!("skipping account row: {}", err);
        }
    }
    debug!("loaded {} accounts", bank.len());
    bank.prepare();

    // Rows are written as queries are read; the first failure stops the stream
    let mut failure: Option<Box<dyn Error>> = None;
    let rows = read_csv::<Query, _>(queries_path)?.map_while(|query| {
        match answer(&bank, query) {
            Ok(row) => Some(row),
            Err(err) => {
                failure = Some(err);
                None
            }
        }
    });
    write_csv(writer, rows)?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn answer<S: AccountStorage>(
    bank: &Bank<S>,
    query: csv::Result<Query>,
) -> Result<LookupRow, Box<dyn Error>> {
    let Query { number } = query?;
    let account = bank.get_account(&number)?;
    Ok(LookupRow::new(number, account))
}
