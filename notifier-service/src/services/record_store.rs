use async_trait::async_trait;
use firestore_rest::FirestoreClient;
use serde_json::Value;

use crate::error::Result;

/// Read access to the externally-owned document store
///
/// Handlers receive an implementation at construction; production wires in
/// Firestore, tests wire in fixtures.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a document by collection and id; `None` when it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;
}

/// Firestore-backed record store
pub struct FirestoreRecordStore {
    client: FirestoreClient,
}

impl FirestoreRecordStore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for FirestoreRecordStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        Ok(self.client.get_document(collection, id).await?)
    }
}
