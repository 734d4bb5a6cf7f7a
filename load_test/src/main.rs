use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use putgen::config::{DEFAULT_COUNT, DEFAULT_DELAY_MS, DEFAULT_ENDPOINT, DEFAULT_WORKERS};
use putgen::{ConfigBuilder, HttpTransport};

#[derive(Parser, Debug)]
struct Args {
    /// URL every object is PUT to
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// number of objects, keyed 1..=count
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    count: u64,

    /// pause before each request
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = ConfigBuilder::new()
        .with_endpoint(args.endpoint)
        .with_workers(args.workers)
        .with_count(args.count)
        .with_delay(Duration::from_millis(args.delay_ms))
        .build()?;

    let transport = HttpTransport::new(config.endpoint());
    let mut out = io::stdout().lock();

    putgen::run(&config, transport, &mut out).await?;

    Ok(())
}
