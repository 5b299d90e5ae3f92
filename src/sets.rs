//! Signature-set operations.
//!
//! A set groups related signature messages under one group code. This module
//! provides the SetsClient for creating sets and polling their summary.

use crate::client::Client;
use crate::document::Document;
use crate::error::Result;
use crate::types::{Recipient, SignatureConfig, SignatureEntry, WORKFLOW_PRESENTIAL, signature_policies};
use serde_json::{Value, json};

/// Client for signature-set operations.
///
/// Access via `client.sets()`.
pub struct SetsClient {
    client: Client,
}

impl SetsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a bare process from a list of documents.
    ///
    /// POSTs `set` with one serialized message per document, in order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use viafirma::{Client, Document};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-user", "api-password");
    ///     let docs = vec![
    ///         Document::template().template_reference("tpl-1"),
    ///         Document::template().template_reference("tpl-2"),
    ///     ];
    ///     let response = client.sets().create_process("GROUP-1", &docs).await?;
    ///     println!("{response}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_process(&self, group_code: &str, documents: &[Document]) -> Result<Value> {
        let body = json!({
            "groupCode": group_code,
            "messages": documents.iter().map(Document::serialize).collect::<Vec<_>>(),
        });
        self.client.post("set", &body).await
    }

    /// Create a presential signature set.
    ///
    /// Builds one message per entry, each carrying the serialized document
    /// and a single SERVER/PADES_B signature policy. Entries with coords get
    /// a visual-signature position on page 1. When the configuration carries
    /// callback addresses they are attached to every message.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use viafirma::{Client, Document, SignatureConfig, SignatureEntry};
    /// use serde_json::json;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-user", "api-password");
    ///
    ///     let entries = vec![
    ///         SignatureEntry::new(Document::base64("QQ==")).with_coords([10, 10, 50, 50]),
    ///     ];
    ///     let recipients = vec![json!({"name": "Jane", "mail": "jane@example.com"})];
    ///     let config = SignatureConfig::with_callback_mails(vec!["ops@example.com".into()]);
    ///
    ///     let response = client
    ///         .sets()
    ///         .create_signature("GROUP-1", &entries, &recipients, &config)
    ///         .await?;
    ///     println!("{response}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_signature(
        &self,
        group_code: &str,
        entries: &[SignatureEntry],
        recipients: &[Recipient],
        configuration: &SignatureConfig,
    ) -> Result<Value> {
        let messages: Vec<Value> = entries
            .iter()
            .map(|entry| {
                let mut message = json!({
                    "document": entry.document.serialize(),
                    "policies": signature_policies(entry.coords.as_ref()),
                });
                if let Some(mails) = &configuration.callback_mails {
                    message["callbackMails"] = json!(mails);
                }
                message
            })
            .collect();

        let body = json!({
            "groupCode": group_code,
            "workflow": { "type": WORKFLOW_PRESENTIAL },
            "recipients": recipients,
            "messages": messages,
        });
        self.client.post("set", &body).await
    }

    /// Get the status summary of a set by its signature code.
    ///
    /// GETs `set/summary/{code}` and returns the decoded body unchanged.
    pub async fn summary(&self, code: &str) -> Result<Value> {
        self.client.get(&format!("set/summary/{code}")).await
    }
}
