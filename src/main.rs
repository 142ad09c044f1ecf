use anyhow::Result;
use tracing::info;

use tsbench::bench;
use tsbench::config::Config;
use tsbench::convert::{TIMESTAMP_LEN, TimestampBuf};
use tsbench::record::{DateTimeRecord, RecordGenerator};

fn main() -> Result<()> {
    let config = Config::load();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .init();

    info!("tsbench v{}", env!("CARGO_PKG_VERSION"));

    // Records and output buffers are allocated once up front and reused in
    // place across every phase, keeping allocator traffic out of the timings.
    let mut records = vec![DateTimeRecord::default(); config.count];
    let mut out: Vec<TimestampBuf> = vec![[0u8; TIMESTAMP_LEN + 1]; config.count];
    let mut generator = RecordGenerator::new(config.seed);

    bench::run(&mut generator, &mut records, &mut out);

    Ok(())
}
