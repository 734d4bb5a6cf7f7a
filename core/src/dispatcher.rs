use std::time::Duration;

use log::debug;

use crate::outcome::Outcome;
use crate::transport::{Task, Transport};

pub struct Dispatcher<T> {
    transport: T,
    delay: Duration,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, delay: Duration) -> Self {
        Self { transport, delay }
    }

    /// Sends one freshly generated record under `key`. Transport errors end
    /// up in the returned outcome; nothing is propagated.
    pub async fn dispatch(&self, key: u64) -> Outcome {
        tokio::time::sleep(self.delay).await;

        let task = Task::new(key);
        debug!("sending key {key}");

        match self.transport.put(task).await {
            Ok(reply) => Outcome::sent(key, reply),
            Err(e) => {
                debug!("error sending key {key}: {e:#}");
                Outcome::failed(key, format!("{e:#}"))
            }
        }
    }
}
