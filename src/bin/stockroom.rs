//! Stockroom Binary
//!
//! Runs the reference inventory scenario against an in-memory index.

use clap::Parser;
use stockroom::{Command, Config, Index, Lookup, Outcome, Record, StockError};
use tracing_subscriber::{fmt, EnvFilter};

/// Stockroom
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "In-memory inventory index")]
#[command(version)]
struct Args {
    /// Extra item to add before listing, as ID=DESCRIPTION@LOCATION
    #[arg(short, long = "item")]
    items: Vec<Record>,

    /// Number of records to pre-allocate room for
    #[arg(short, long, default_value = "0")]
    capacity: usize,

    /// Log filter used when RUST_LOG is unset
    #[arg(short, long)]
    log: Option<String>,

    /// Skip the scripted scenario and only add --item records
    #[arg(long)]
    skip_demo: bool,
}

fn main() {
    let args = Args::parse();

    let mut builder = Config::builder().initial_capacity(args.capacity);
    if let Some(filter) = &args.log {
        builder = builder.log_filter(filter);
    }
    let config = builder.build();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Stockroom v{}", stockroom::VERSION);

    let mut index = Index::with_config(&config);

    if !args.skip_demo {
        run_demo(&mut index);
    }

    for e in index.add_all(args.items) {
        report(&e);
    }

    println!("Items in description order:");
    for record in index.list_by_description() {
        println!("{}", record);
    }
}

/// Reference scenario: every failure is reported and the run continues
fn run_demo(index: &mut Index) {
    let script = [
        Command::Add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1")),
        Command::Add(Record::new("ITEM002", "Fan Motor", "Aisle 2, Shelf 5")),
        Command::Add(Record::new("ITEM001", "LED Light", "Aisle 3, Shelf 1")),
        Command::find("ITEM002"),
        Command::remove("ITEM003"),
        Command::find("ITEM003"),
    ];

    for command in script {
        match index.execute(command) {
            Ok(Outcome::Found(record)) => {
                println!("Found: {} at {}", record.description(), record.location());
            }
            Ok(_) => {}
            Err(e) => report(&e),
        }
    }
}

fn report(error: &StockError) {
    tracing::info!(key = error.key(), "{}", error);
    match error {
        StockError::ItemNotFound { lookup: Lookup::Remove, .. } => {
            println!("Error: {}", error);
        }
        _ => println!("{}", error),
    }
}
