//! Generates synthetic records and PUTs them at an endpoint from a bounded
//! pool of workers, reporting one line per request as it finishes.

pub mod config;
pub mod dispatcher;
pub mod outcome;
pub mod pool;
pub mod record;
pub mod transport;

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use log::info;

pub use config::{Config, ConfigBuilder};
pub use dispatcher::Dispatcher;
pub use outcome::{Outcome, Summary};
pub use pool::Coordinator;
pub use record::Record;
pub use transport::{HttpTransport, Reply, Task, Transport};

/// Sends the whole batch described by `config` through `transport`, writing
/// each outcome to `out` as soon as it completes. Failed requests are
/// reported, never returned as errors.
pub async fn run<T, W>(config: &Config, transport: T, out: &mut W) -> Result<Summary>
where
    T: Transport,
    W: Write,
{
    info!(
        "sending {} objects to {} with {} workers",
        config.count(),
        config.endpoint(),
        config.workers()
    );

    let start = Instant::now();
    let dispatcher = Dispatcher::new(transport, config.delay());
    let mut coordinator = Coordinator::new(config.workers(), dispatcher);

    for key in config.keys() {
        coordinator.submit(key);
    }

    let mut summary = Summary::default();
    while let Some(outcome) = coordinator.next_completed().await {
        writeln!(out, "{outcome}")?;
        summary.record(&outcome);
    }
    summary.elapsed = start.elapsed();

    writeln!(out, "All {} objects have been sent.", config.count())?;
    out.flush()?;

    info!("{summary}");
    Ok(summary)
}
