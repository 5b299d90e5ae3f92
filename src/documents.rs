//! Signed-document and audit-trail downloads.

use crate::client::Client;
use crate::error::Result;
use serde_json::Value;

/// Client for document download operations.
///
/// Access via `client.documents()`.
///
/// Both endpoints decode the response body as JSON, mirroring the upstream
/// integration this client reproduces. The service has not been confirmed to
/// return raw bytes here, so no streaming download is offered.
pub struct DocumentsClient {
    client: Client,
}

impl DocumentsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Download the signed rendition of a document.
    ///
    /// GETs `documents/download/signed/{id}`.
    pub async fn download_signed(&self, document_id: &str) -> Result<Value> {
        self.client
            .get(&format!("documents/download/signed/{document_id}"))
            .await
    }

    /// Download the audit trail of a document.
    ///
    /// GETs `documents/download/trail/{id}`.
    pub async fn download_trail(&self, document_id: &str) -> Result<Value> {
        self.client
            .get(&format!("documents/download/trail/{document_id}"))
            .await
    }
}
