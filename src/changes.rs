use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::domain::EventKind;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Members,
    Tournaments,
    Leagues,
}

impl From<EventKind> for Collection {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Tournament => Collection::Tournaments,
            EventKind::League => Collection::Leagues,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Created,
    Updated,
    Deleted,
}

/// One write observed against a collection. Carries the full document for
/// creates and updates; deletes carry only the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Change {
    pub collection: Collection,
    pub op: ChangeOp,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<serde_json::Value>,
}

impl Change {
    pub fn created<T: Serialize>(collection: Collection, id: &str, doc: &T) -> Self {
        Self {
            collection,
            op: ChangeOp::Created,
            id: id.to_string(),
            doc: serde_json::to_value(doc).ok(),
        }
    }

    pub fn updated<T: Serialize>(collection: Collection, id: &str, doc: &T) -> Self {
        Self {
            collection,
            op: ChangeOp::Updated,
            id: id.to_string(),
            doc: serde_json::to_value(doc).ok(),
        }
    }

    pub fn deleted(collection: Collection, id: &str) -> Self {
        Self {
            collection,
            op: ChangeOp::Deleted,
            id: id.to_string(),
            doc: None,
        }
    }
}

/// Fan-out point for live change notifications. Services publish after
/// every successful store write; subscribers (the SSE endpoint, other
/// sessions) each get an independent stream. Publishing never fails the
/// originating operation.
pub struct ChangeHub {
    tx: broadcast::Sender<Change>,
}

impl ChangeHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, change: Change) {
        // Err just means nobody is listening right now.
        if let Ok(n) = self.tx.send(change) {
            tracing::debug!("Change delivered to {} subscriber(s)", n);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Change> {
        self.tx.subscribe()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new(256)
    }
}
