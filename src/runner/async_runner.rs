use log::{debug, warn};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{
    dto::{Account, LookupRow, Query},
    stores::{AccountStorage, BinarySearchStore},
    Bank,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use serde::de::DeserializeOwned;
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs the lookup async on the given accounts and queries files and writes results to the provided writer.
/// Spawns two tasks for loading:
/// * CSV reader - streams accounts from the input file, deserializes them and sends them to the loader via channel.
/// * Loader - receives accounts from the channel and opens them in the bank until the channel is closed.
///
/// Once loading is done the bank is sorted and the queries file is streamed and answered in order.
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
pub async fn run<P, Q, W>(accounts_path: P, queries_path: Q, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    run_with(BinarySearchStore::new(), accounts_path, queries_path, writer).await
}

/// Same as [`run`], with the accounts held in the given storage.
/// The storage is moved into the loader task, so it must be `Send`.
pub async fn run_with<S, P, Q, W>(
    storage: S,
    accounts_path: P,
    queries_path: Q,
    writer: W,
) -> Result<()>
where
    S: AccountStorage + Send + 'static,
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    // Create channel for passing accounts from reader to loader
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let accounts_path = accounts_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_records::<Account>(accounts_path, tx));
    let loader_handle = tokio::spawn(load_accounts(storage, rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    let mut bank = loader_handle.await?;
    debug!("loaded {} accounts", bank.len());
    bank.prepare();

    // Queries are answered on this task, the bank is read-only from here on
    let (tx, mut rx) = mpsc::channel(BUFFER_SIZE);
    let queries_path = queries_path.as_ref().to_owned();
    let query_handle = tokio::spawn(read_records::<Query>(queries_path, tx));

    // Rows are written as queries arrive
    let mut wtr = csv::Writer::from_writer(writer);
    while let Some(Query { number }) = rx.recv().await {
        let account = bank.get_account(&number)?;
        wtr.serialize(LookupRow::new(number, account))?;
    }
    wtr.flush()?;
    query_handle.await??;
    Ok(())
}

/// Reads and deserializes records from a CSV file.
/// Returns them through the provided channel.
async fn read_records<T>(input_path: PathBuf, tx: mpsc::Sender<T>) -> Result<(), CsvError>
where
    T: DeserializeOwned + Send + 'static,
{
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<T>();
    while let Some(result) = records.next().await {
        match result {
            Ok(record) => {
                if tx.send(record).await.is_err() {
                    // Receiver dropped, exit gracefully
                    break;
                }
            }
            // CSV parsing errors are critical - propagate them
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Opens accounts received through the channel.
/// Returns the loaded bank once the channel is closed by the reader.
async fn load_accounts<S: AccountStorage>(
    storage: S,
    mut rx: mpsc::Receiver<Account>,
) -> Bank<S> {
    let mut bank = Bank::new(storage);
    while let Some(account) = rx.recv().await {
        // Duplicate accounts are skipped, the first one wins
        if let Err(err) = bank.open_account(account) {
            warn!("skipping account row: {}", err);
        }
    }
    bank
}
