//! The outbound publishing seam and its test doubles.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::PublishError;
use crate::topology::Topic;

/// Publishes a text payload to a topic.
///
/// One delivery attempt per call; no internal retry loop. Transport failures
/// are returned as [`PublishError`], never swallowed; the caller decides
/// whether a failed publish is fatal to the surrounding operation.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &Topic, payload: &str) -> Result<(), PublishError>;
}

/// In-memory publisher that records every publish. For tests and examples.
#[derive(Default)]
pub struct RecordingPublisher {
    published: Mutex<Vec<(Topic, String)>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All (topic, payload) pairs published so far.
    pub fn published(&self) -> Vec<(Topic, String)> {
        self.published.lock().unwrap().clone()
    }

    /// Payloads published so far, in order.
    pub fn payloads(&self) -> Vec<String> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .map(|(_, p)| p.clone())
            .collect()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, topic: &Topic, payload: &str) -> Result<(), PublishError> {
        self.published
            .lock()
            .unwrap()
            .push((topic.clone(), payload.to_string()));
        Ok(())
    }
}

/// Publisher that fails every publish, but still records the attempt.
/// For testing best-effort publication paths.
#[derive(Default)]
pub struct FailingPublisher {
    attempts: Mutex<Vec<String>>,
}

impl FailingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads that were attempted, in order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _topic: &Topic, payload: &str) -> Result<(), PublishError> {
        self.attempts.lock().unwrap().push(payload.to_string());
        Err(PublishError::Connect("broker unavailable".to_string()))
    }
}
