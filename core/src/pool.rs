use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error};
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinSet};

use crate::dispatcher::Dispatcher;
use crate::outcome::Outcome;
use crate::transport::Transport;

/// Runs dispatches on a fixed number of slots and hands back outcomes in the
/// order they finish.
pub struct Coordinator<T> {
    dispatcher: Arc<Dispatcher<T>>,
    permits: Arc<Semaphore>,
    tasks: JoinSet<Outcome>,
    keys: HashMap<Id, u64>,
}

impl<T: Transport> Coordinator<T> {
    pub fn new(workers: usize, dispatcher: Dispatcher<T>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            permits: Arc::new(Semaphore::new(workers)),
            tasks: JoinSet::new(),
            keys: HashMap::new(),
        }
    }

    /// Queues `key`. The task holds a slot from before its delay until its
    /// request returns.
    pub fn submit(&mut self, key: u64) -> Id {
        let dispatcher = self.dispatcher.clone();
        let permits = self.permits.clone();

        let handle = self.tasks.spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return Outcome::failed(key, "worker pool closed");
            };
            dispatcher.dispatch(key).await
        });

        let id = handle.id();
        self.keys.insert(id, key);
        debug!("submitted key {key}");
        id
    }

    /// Next finished outcome, or `None` when nothing is pending.
    pub async fn next_completed(&mut self) -> Option<Outcome> {
        match self.tasks.join_next_with_id().await? {
            Ok((id, outcome)) => {
                self.keys.remove(&id);
                Some(outcome)
            }
            Err(e) => {
                // a panicked task still owes its key an outcome
                let key = self.keys.remove(&e.id()).unwrap_or_default();
                error!("task for key {key} died: {e}");
                Some(Outcome::failed(key, e.to_string()))
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
