//! # Viafirma Rust SDK
//!
//! Rust client for the Viafirma Documents API v3, the electronic-signature
//! service at `https://{environment}.viafirma.com/documents/api/v3`.
//!
//! The crate builds the JSON request bodies the service expects (documents,
//! presential signature workflows, recipients), sends them over HTTPS with
//! HTTP Basic authentication, and returns the decoded JSON responses. The
//! liveness probe is the one exception: it hands back the raw HTTP response
//! so callers can judge by status code.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use viafirma::{Client, Document};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Sandbox client; use `Client::with_environment` for production.
//!     let client = Client::new("api-user", "api-password");
//!
//!     // Dispatch an inline PDF to signature.
//!     let doc = Document::base64_from_bytes(b"%PDF-1.4 ...");
//!     let created = client.messages().dispatch("GROUP-1", &doc).await?;
//!
//!     // Poll its status by the code the service returned.
//!     if let Some(code) = created["code"].as_str() {
//!         let status = client.messages().status(code).await?;
//!         println!("status: {status}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Signature sets with visual positions
//!
//! ```rust,no_run
//! use viafirma::{Client, Document, SignatureConfig, SignatureEntry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("api-user", "api-password");
//!
//!     let entries = vec![
//!         SignatureEntry::new(Document::base64("QQ==")).with_coords([10, 10, 50, 50]),
//!     ];
//!     let recipients = vec![json!({"name": "Jane", "mail": "jane@example.com"})];
//!     let config = SignatureConfig::with_callback_mails(vec!["ops@example.com".into()]);
//!
//!     let response = client
//!         .sets()
//!         .create_signature("GROUP-1", &entries, &recipients, &config)
//!         .await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ViafirmaError>`. The service owns error
//! semantics: the client performs no status-code inspection and no retries,
//! so transport and decode failures surface unmodified:
//!
//! ```rust,no_run
//! use viafirma::{Client, ViafirmaError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("api-user", "api-password");
//!
//!     match client.sets().summary("ABC123").await {
//!         Ok(summary) => println!("{summary}"),
//!         Err(ViafirmaError::Http(e)) => println!("request failed: {e}"),
//!     }
//! }
//! ```

pub mod client;
pub mod document;
pub mod documents;
pub mod error;
pub mod messages;
pub mod sets;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, Environment};
pub use document::{Document, DocumentKind, WATERMARK_TEXT};
pub use error::{Result, ViafirmaError};
pub use types::{Recipient, Rectangle, SignatureConfig, SignatureEntry};
