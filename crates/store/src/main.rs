//! Stonefire console client.
//!
//! Connects to a locally running `PostgreSQL` and drives the numbered-menu
//! ordering interface.
//!
//! # Usage
//!
//! ```bash
//! stonefire-store <dbname> <port> <user>
//! ```
//!
//! The database password, if any, comes from `STONEFIRE_DB_PASSWORD`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;

use stonefire_store::{config::StoreConfig, console, db};

#[derive(Parser)]
#[command(name = "stonefire-store")]
#[command(author, version, about = "Stonefire console ordering client")]
struct Args {
    /// Database name
    dbname: String,
    /// PostgreSQL port on localhost
    port: u16,
    /// Database user
    user: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stonefire_store=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = StoreConfig::new(args.dbname, args.port, args.user);

    println!("Connecting to database...");
    let pool = match db::create_pool(&config.database_url()).await {
        Ok(pool) => pool,
        Err(e) => {
            // Connection failure is fatal; there is nothing to recover.
            eprintln!("Error - unable to connect to database: {e}");
            eprintln!("Make sure PostgreSQL is running on this machine.");
            std::process::exit(1);
        }
    };
    println!("Done");
    tracing::info!(dbname = %config.dbname, port = config.port, "connected");

    if let Err(e) = console::run(&pool).await {
        tracing::error!("console error: {e}");
    }

    println!("Disconnecting from database...");
    pool.close().await;
    println!("Done");
    println!();
    println!("Bye !");
}
