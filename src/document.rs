//! Document model and its wire serialization.
//!
//! A [`Document`] describes one thing to be signed. The remote API accepts
//! either a template lookup (server-side reference) or inline base64 content;
//! both shapes share the same fixed set of JSON keys, with
//! `templateReference` carrying the inline content for base64 documents.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde_json::{Map, Value, json};

/// Watermark applied by the service to document previews.
pub const WATERMARK_TEXT: &str = "Preview";

/// How the document body reaches the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// Server-side template, located through `templateReference`.
    Template,
    /// Inline document content, base64-encoded.
    Base64 {
        /// Base64-encoded bytes of the document.
        content: String,
    },
}

/// A document to be signed.
///
/// # Example
///
/// ```rust
/// use viafirma::Document;
///
/// let doc = Document::base64("QQ==").template_code("contract-es");
/// let body = doc.serialize();
/// assert_eq!(body["templateReference"], "QQ==");
/// assert_eq!(body["watermarkText"], "Preview");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document body variant.
    pub kind: DocumentKind,
    /// Whether the signer must open the document before signing.
    pub read_required: bool,
    /// Template type identifier, when the service expects one.
    pub template_type: Option<String>,
    /// Server-side template reference. Ignored on the wire for base64
    /// documents, where the inline content takes its place.
    pub template_reference: Option<String>,
    /// Template code identifier.
    pub template_code: Option<String>,
    /// Extra top-level fields to forward to the service. The fixed keys
    /// always win over entries placed here.
    pub extra: Map<String, Value>,
}

impl Document {
    fn with_kind(kind: DocumentKind) -> Self {
        Self {
            kind,
            read_required: true,
            template_type: None,
            template_reference: None,
            template_code: None,
            extra: Map::new(),
        }
    }

    /// Create a template document. `read_required` defaults to true.
    pub fn template() -> Self {
        Self::with_kind(DocumentKind::Template)
    }

    /// Create an inline document from already base64-encoded content.
    pub fn base64(content: impl Into<String>) -> Self {
        Self::with_kind(DocumentKind::Base64 {
            content: content.into(),
        })
    }

    /// Create an inline document from raw bytes, encoding them with the
    /// standard base64 alphabet.
    pub fn base64_from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::base64(BASE64.encode(bytes.as_ref()))
    }

    /// Set whether the signer must read the document first.
    pub fn read_required(mut self, read_required: bool) -> Self {
        self.read_required = read_required;
        self
    }

    /// Set the template type.
    pub fn template_type(mut self, template_type: impl Into<String>) -> Self {
        self.template_type = Some(template_type.into());
        self
    }

    /// Set the template reference. Has no wire effect on base64 documents.
    pub fn template_reference(mut self, template_reference: impl Into<String>) -> Self {
        self.template_reference = Some(template_reference.into());
        self
    }

    /// Set the template code.
    pub fn template_code(mut self, template_code: impl Into<String>) -> Self {
        self.template_code = Some(template_code.into());
        self
    }

    /// Attach an extra top-level field to the serialized document.
    pub fn extra_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Serialize to the JSON object shape the Documents API expects.
    ///
    /// The key names are part of the remote contract.
    pub fn serialize(&self) -> Value {
        let mut out = self.extra.clone();

        let template_reference = match &self.kind {
            DocumentKind::Template => json!(self.template_reference),
            DocumentKind::Base64 { content } => json!(content),
        };

        out.insert("templateType".to_string(), json!(self.template_type));
        out.insert("templateReference".to_string(), template_reference);
        out.insert("readRequired".to_string(), json!(self.read_required));
        out.insert("watermarkText".to_string(), json!(WATERMARK_TEXT));
        out.insert("templateCode".to_string(), json!(self.template_code));

        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_serializes_exactly_five_keys() {
        let body = Document::template().serialize();
        let obj = body.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(body["templateType"], Value::Null);
        assert_eq!(body["templateReference"], Value::Null);
        assert_eq!(body["readRequired"], true);
        assert_eq!(body["watermarkText"], "Preview");
        assert_eq!(body["templateCode"], Value::Null);
    }

    #[test]
    fn test_base64_content_overrides_template_reference() {
        let body = Document::base64("QQ==")
            .template_reference("ignored")
            .serialize();
        assert_eq!(body["templateReference"], "QQ==");
    }

    #[test]
    fn test_base64_from_bytes_encodes() {
        let doc = Document::base64_from_bytes(b"A");
        assert_eq!(
            doc.kind,
            DocumentKind::Base64 {
                content: "QQ==".to_string()
            }
        );
    }

    #[test]
    fn test_read_required_can_be_disabled() {
        let body = Document::template().read_required(false).serialize();
        assert_eq!(body["readRequired"], false);
    }

    #[test]
    fn test_named_fields_serialize() {
        let body = Document::template()
            .template_type("pdf")
            .template_reference("tpl-1")
            .template_code("C-42")
            .serialize();
        assert_eq!(body["templateType"], "pdf");
        assert_eq!(body["templateReference"], "tpl-1");
        assert_eq!(body["templateCode"], "C-42");
    }

    #[test]
    fn test_extra_fields_never_shadow_fixed_keys() {
        let body = Document::template()
            .extra_field("watermarkText", json!("Custom"))
            .extra_field("metadata", json!({"source": "erp"}))
            .serialize();
        assert_eq!(body["watermarkText"], "Preview");
        assert_eq!(body["metadata"]["source"], "erp");
    }
}
