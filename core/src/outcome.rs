use std::fmt;
use std::time::Duration;

use crate::transport::Reply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent {
        key: u64,
        status: u16,
        body: String,
    },
    Failed {
        key: u64,
        details: String,
    },
}

impl Outcome {
    pub fn sent(key: u64, reply: Reply) -> Self {
        Outcome::Sent {
            key,
            status: reply.status,
            body: reply.body,
        }
    }

    pub fn failed<T: Into<String>>(key: u64, details: T) -> Self {
        Outcome::Failed {
            key,
            details: details.into(),
        }
    }

    pub fn key(&self) -> u64 {
        match self {
            Outcome::Sent { key, .. } | Outcome::Failed { key, .. } => *key,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sent { key, status, body } => {
                write!(f, "Sent object with key={key}; Response: {status} - {body}")
            }
            Outcome::Failed { key, details } => {
                write!(f, "Error sending object with key={key}; Details: {details}")
            }
        }
    }
}

/// Tally of one batch.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub sent: u64,
    pub failed: u64,
    pub elapsed: Duration,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_sent() {
            self.sent += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.sent + self.failed
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sent, {} failed in {:.2?}",
            self.sent, self.failed, self.elapsed
        )
    }
}
