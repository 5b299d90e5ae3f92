//! Integration tests for single-message operations and document downloads.

use serde_json::json;
use viafirma::{Client, ClientConfig, Document};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> Client {
    Client::with_config(
        "user",
        "pass",
        ClientConfig {
            base_url: Some(mock_server.uri()),
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn test_dispatch_body() {
    let mock_server = MockServer::start().await;

    let doc = Document::base64("QQ==");

    Mock::given(method("POST"))
        .and(path("/message/dispatch"))
        .and(body_json(json!({
            "groupCode": "G1",
            "workflow": {"type": "PRESENTIAL"},
            "notification": {"text": "1a linea", "detail": "2a linea"},
            "document": doc.serialize(),
            "policies": [{
                "evidences": [{"type": "SIGNATURE"}],
                "signatures": [{"type": "SERVER", "typeFormatSign": "PADES_B"}],
            }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "MSG-1",
            "status": "WAITING"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = test_client(&mock_server)
        .messages()
        .dispatch("G1", &doc)
        .await
        .unwrap();
    assert_eq!(response["code"], "MSG-1");
}

#[tokio::test]
async fn test_status_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/messages/status/MSG-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "RESPONSED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let status = test_client(&mock_server)
        .messages()
        .status("MSG-1")
        .await
        .unwrap();
    assert_eq!(status["status"], "RESPONSED");
}

#[tokio::test]
async fn test_get_returns_full_detail() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "code": "MSG-1",
        "status": "RESPONSED",
        "document": {"templateCode": "C-42"},
    });

    Mock::given(method("GET"))
        .and(path("/messages/MSG-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let detail = test_client(&mock_server)
        .messages()
        .get("MSG-1")
        .await
        .unwrap();
    assert_eq!(detail, body);
}

#[tokio::test]
async fn test_download_signed_decodes_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/download/signed/DOC-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "DOC-1",
            "link": "https://example.com/DOC-1.pdf"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = test_client(&mock_server)
        .documents()
        .download_signed("DOC-1")
        .await
        .unwrap();
    assert_eq!(response["id"], "DOC-1");
}

#[tokio::test]
async fn test_download_trail_decodes_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/download/trail/DOC-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "DOC-1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = test_client(&mock_server)
        .documents()
        .download_trail("DOC-1")
        .await
        .unwrap();
    assert_eq!(response["id"], "DOC-1");
}
