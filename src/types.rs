//! Workflow value types shared across the SDK.
//!
//! The remote contract leaves recipients and most workflow structures
//! untyped; they pass through as raw JSON. Only the pieces the client itself
//! assembles get light value types here.

use crate::document::Document;
use serde_json::{Value, json};

/// Workflow type used by every signature request this client builds.
pub const WORKFLOW_PRESENTIAL: &str = "PRESENTIAL";

/// Evidence type attached to each signature policy.
pub const EVIDENCE_SIGNATURE: &str = "SIGNATURE";

/// Signature type: the server holds the signing certificate.
pub const SIGNATURE_SERVER: &str = "SERVER";

/// PAdES baseline signature format required by the service.
pub const SIGN_FORMAT_PADES_B: &str = "PADES_B";

/// Visual-signature rectangle, serialized as a four-element JSON array.
pub type Rectangle = [u32; 4];

/// A recipient, passed through to the service as opaque structured data.
/// The client performs no validation beyond forwarding it.
pub type Recipient = Value;

/// One document entry of a signature set.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureEntry {
    /// The document to sign, typically an inline base64 document.
    pub document: Document,
    /// Optional visual-signature rectangle. Placement is always on page 1;
    /// the service contract this client targets has no multi-page support.
    pub coords: Option<Rectangle>,
}

impl SignatureEntry {
    /// Entry without a visual-signature position.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            coords: None,
        }
    }

    /// Attach a visual-signature rectangle.
    pub fn with_coords(mut self, coords: Rectangle) -> Self {
        self.coords = Some(coords);
        self
    }
}

impl From<Document> for SignatureEntry {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}

/// Optional configuration applied to every message of a signature set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureConfig {
    /// Email addresses the service notifies on workflow events.
    pub callback_mails: Option<Vec<String>>,
}

impl SignatureConfig {
    /// Configuration carrying callback addresses.
    pub fn with_callback_mails(mails: Vec<String>) -> Self {
        Self {
            callback_mails: Some(mails),
        }
    }
}

/// Build the single-policy block shared by set and dispatch requests:
/// one SIGNATURE evidence plus one SERVER/PADES_B signature entry.
pub(crate) fn signature_policies(coords: Option<&Rectangle>) -> Value {
    let mut evidence = json!({ "type": EVIDENCE_SIGNATURE });
    if let Some(rectangle) = coords {
        evidence["positions"] = json!([{ "rectangle": rectangle, "page": 1 }]);
    }

    json!([{
        "evidences": [evidence],
        "signatures": [{
            "type": SIGNATURE_SERVER,
            "typeFormatSign": SIGN_FORMAT_PADES_B,
        }],
    }])
}
