//! High-frequency submission demo
//!
//! Floods the writer with 10,000 records and shows that close drains every
//! one of them to the file.
//!
//! Run with: cargo run --example high_frequency

use async_file_logger::prelude::*;

fn main() -> Result<()> {
    let mut writer = AsyncWriter::open("app.log")?;

    for _ in 0..10_000 {
        writer.info("High frequency log test");
    }

    writer.close();

    let metrics = writer.metrics();
    println!(
        "submitted={} written={} failures={}",
        metrics.records_submitted(),
        metrics.records_written(),
        metrics.write_failures()
    );

    Ok(())
}
