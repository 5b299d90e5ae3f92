//! Single-message operations.
//!
//! This module provides the MessagesClient for dispatching one document to
//! signature and polling the resulting message.

use crate::client::Client;
use crate::document::Document;
use crate::error::Result;
use crate::types::{WORKFLOW_PRESENTIAL, signature_policies};
use serde_json::{Value, json};

/// Notification headline shown to the signer. Fixed by the upstream
/// integration this client reproduces.
const NOTIFICATION_TEXT: &str = "1a linea";
/// Notification detail line, same origin.
const NOTIFICATION_DETAIL: &str = "2a linea";

/// Client for single-message operations.
///
/// Access via `client.messages()`.
pub struct MessagesClient {
    client: Client,
}

impl MessagesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Dispatch a single document to signature.
    ///
    /// POSTs `message/dispatch` with a presential workflow, the fixed
    /// notification pair, and one SERVER/PADES_B signature policy.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use viafirma::{Client, Document};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-user", "api-password");
    ///     let doc = Document::base64_from_bytes(b"%PDF-1.4 ...");
    ///     let response = client.messages().dispatch("GROUP-1", &doc).await?;
    ///     println!("{response}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn dispatch(&self, group_code: &str, document: &Document) -> Result<Value> {
        let body = json!({
            "groupCode": group_code,
            "workflow": { "type": WORKFLOW_PRESENTIAL },
            "notification": {
                "text": NOTIFICATION_TEXT,
                "detail": NOTIFICATION_DETAIL,
            },
            "document": document.serialize(),
            "policies": signature_policies(None),
        });
        self.client.post("message/dispatch", &body).await
    }

    /// Check the status of a dispatched message.
    ///
    /// GETs `messages/status/{code}` and returns the decoded body unchanged.
    pub async fn status(&self, code: &str) -> Result<Value> {
        self.client.get(&format!("messages/status/{code}")).await
    }

    /// Get the full detail of a dispatched message.
    ///
    /// GETs `messages/{code}` and returns the decoded body unchanged.
    pub async fn get(&self, code: &str) -> Result<Value> {
        self.client.get(&format!("messages/{code}")).await
    }
}
