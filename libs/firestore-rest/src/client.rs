use gcp_auth::TokenProvider;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::errors::FirestoreError;
use crate::value::decode_fields;

/// Firestore REST document response
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[allow(dead_code)]
    name: Option<String>,
    fields: Option<serde_json::Map<String, Value>>,
}

/// Firestore REST client
///
/// Fetches single documents from the project's default database. A missing
/// document is `Ok(None)`, not an error.
pub struct FirestoreClient {
    project_id: String,
    token_provider: Arc<TokenProvider>,
    http_client: reqwest::Client,
}

impl FirestoreClient {
    pub fn new(project_id: String, token_provider: Arc<TokenProvider>) -> Self {
        Self {
            project_id,
            token_provider,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetch a document by collection and id, decoded to plain JSON.
    pub async fn get_document(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Option<Value>, FirestoreError> {
        let access_token = self.token_provider.access_token().await?;
        let url = self.document_url(collection, document_id);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| FirestoreError::Request(e.to_string()))?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let document: FirestoreDocument = response
                    .json()
                    .await
                    .map_err(|e| FirestoreError::Parse(e.to_string()))?;

                let data = document
                    .fields
                    .map(|fields| decode_fields(&fields))
                    .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

                Ok(Some(data))
            }
            reqwest::StatusCode::NOT_FOUND => {
                tracing::debug!("Document {}/{} does not exist", collection, document_id);
                Ok(None)
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());

                Err(FirestoreError::Api(status.to_string(), error_text))
            }
        }
    }

    fn document_url(&self, collection: &str, document_id: &str) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.project_id, collection, document_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcp_auth::ServiceAccountKey;

    fn test_client() -> FirestoreClient {
        let key = ServiceAccountKey {
            project_id: "peacefulworkouts".to_string(),
            private_key_id: "key-id".to_string(),
            private_key: "not-a-real-key".to_string(),
            client_email: "notifier@peacefulworkouts.iam.gserviceaccount.com".to_string(),
            client_id: "1008908513514".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        };
        let provider = Arc::new(TokenProvider::new(key, gcp_auth::CLOUD_PLATFORM_SCOPE));
        FirestoreClient::new("peacefulworkouts".to_string(), provider)
    }

    #[test]
    fn test_document_url() {
        let client = test_client();
        assert_eq!(
            client.document_url("posts", "p42"),
            "https://firestore.googleapis.com/v1/projects/peacefulworkouts/databases/(default)/documents/posts/p42"
        );
    }

    #[test]
    fn test_document_without_fields_decodes_to_empty_object() {
        let raw = r#"{ "name": "projects/p/databases/(default)/documents/posts/p1" }"#;
        let document: FirestoreDocument = serde_json::from_str(raw).unwrap();

        let data = document
            .fields
            .map(|fields| decode_fields(&fields))
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        assert_eq!(data, serde_json::json!({}));
    }
}
