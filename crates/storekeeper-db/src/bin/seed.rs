//! # Seed Data Generator
//!
//! Populates a database with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p storekeeper-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p storekeeper-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p storekeeper-db --bin seed -- --db ./data/storeKeeper.db
//! ```
//!
//! Quantities cycle from 0 to 24 so every stock status shows up.

use std::env;
use storekeeper_core::{InventorySummary, NewProduct};
use storekeeper_db::{InventoryStore, StoreConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Used when `--count` is absent or not a number.
const DEFAULT_COUNT: usize = 50;

/// Demo catalogue: (name, base price).
const CATALOGUE: &[(&str, f64)] = &[
    ("Wireless Mouse", 15.50),
    ("USB-C Cable", 4.00),
    ("Mechanical Keyboard", 79.99),
    ("Laptop Stand", 32.00),
    ("Notebook A5", 2.49),
    ("Gel Pen", 1.20),
    ("Desk Lamp", 27.50),
    ("Phone Charger", 12.99),
    ("Headphones", 49.00),
    ("Water Bottle", 9.75),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from("./storeKeeper_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = parse_count(&args[i + 1]);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Storekeeper Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./storeKeeper_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Storekeeper Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let store = InventoryStore::open(StoreConfig::new(&db_path)).await?;

    let existing = store.count().await?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);
        if let Err(e) = store.create(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }
        generated += 1;
    }

    println!("Generated {} products in {:?}", generated, start.elapsed());

    let summary = InventorySummary::from_products(&store.read_all().await?);
    println!();
    println!("  Stock level:     {}", summary.stock_level);
    println!("  Low stock items: {}", summary.low_stock_items);
    println!("  Total products:  {}", summary.total_products);

    store.close().await?;
    Ok(())
}

/// Parses the `--count` value, falling back to the default.
fn parse_count(value: &str) -> usize {
    value.parse().unwrap_or_else(|_| {
        warn!(value = %value, default = DEFAULT_COUNT, "Ignoring invalid --count");
        DEFAULT_COUNT
    })
}

/// Builds the `seed`-th demo product.
fn generate_product(seed: usize) -> NewProduct {
    let (name, base_price) = CATALOGUE[seed % CATALOGUE.len()];
    let batch = seed / CATALOGUE.len();

    let name = if batch == 0 {
        name.to_string()
    } else {
        format!("{} #{}", name, batch + 1)
    };
    let quantity = ((seed * 7) % 25) as i64;

    NewProduct::new(name, quantity, base_price)
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every store call
/// - Default: INFO, DEBUG for storekeeper crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storekeeper=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================
