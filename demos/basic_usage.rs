//! Basic usage demo
//!
//! Logs one record per level, then relies on drop for shutdown.
//!
//! Run with: cargo run --example basic_usage

use async_file_logger::prelude::*;

fn main() -> Result<()> {
    let writer = AsyncWriter::open("app.log")?;

    writer.info("Application started");
    writer.warn("Low memory warning");
    writer.error("Something failed");

    println!("Logged 3 records to 'app.log'");

    Ok(()) // drop drains the queue and flushes the file
}
