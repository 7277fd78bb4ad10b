use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use rusty_lookup::{
    run_async_with, run_with, simulate, BinarySearchStore, HashStore, SimulationConfig,
};

#[derive(Parser)]
#[command(name = "rusty-lookup")]
#[command(author, version, about = "Bulk-load bank accounts and look them up by account number")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load accounts from CSV and answer the queries in a second CSV
    Lookup {
        /// CSV file with `number,balance` rows
        accounts: PathBuf,

        /// CSV file with `number` rows to look up
        queries: PathBuf,

        /// Storage used to hold the accounts
        #[arg(long, value_enum, default_value_t = Storage::Binary)]
        storage: Storage,

        /// Stream the input files on a tokio runtime
        #[arg(long = "async")]
        run_async: bool,
    },

    /// Time loading and looking up synthetic accounts
    Simulate {
        /// Number of accounts to generate
        #[arg(long, default_value_t = 1_000_000)]
        accounts: u32,

        /// Seed for the shuffle, random if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Storage {
    /// Sorted vector with binary search
    Binary,
    /// Hash map
    Hash,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Lookup {
            accounts,
            queries,
            storage,
            run_async: true,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            let result = match storage {
                Storage::Binary => rt.block_on(run_async_with(
                    BinarySearchStore::new(),
                    accounts,
                    queries,
                    io::stdout(),
                )),
                Storage::Hash => rt.block_on(run_async_with(
                    HashStore::new(),
                    accounts,
                    queries,
                    io::stdout(),
                )),
            };
            result.map_err(|err| err as Box<dyn Error>)
        }
        Commands::Lookup {
            accounts,
            queries,
            storage,
            run_async: false,
        } => match storage {
            Storage::Binary => {
                run_with(BinarySearchStore::new(), accounts, queries, io::stdout())
            }
            Storage::Hash => run_with(HashStore::new(), accounts, queries, io::stdout()),
        },
        Commands::Simulate { accounts, seed } => {
            let report = simulate(&SimulationConfig { accounts, seed })?;
            report.log();
            Ok(())
        }
    }
}
