use std::future::Future;

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Body of a single write: `{"key": .., "value": {..}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub key: u64,
    pub value: Record,
}

impl Task {
    pub fn new(key: u64) -> Self {
        Self {
            key,
            value: Record::generate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Delivers one task to the target. Any reply from the remote end is `Ok`,
/// whatever its status; `Err` means the request never completed.
pub trait Transport: Send + Sync + 'static {
    fn put(&self, task: Task) -> impl Future<Output = Result<Reply>> + Send;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new<T: Into<String>>(endpoint: T) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Transport for HttpTransport {
    async fn put(&self, task: Task) -> Result<Reply> {
        let resp = self.client.put(&self.endpoint).json(&task).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        debug!("key {} got {status}", task.key);
        Ok(Reply { status, body })
    }
}
