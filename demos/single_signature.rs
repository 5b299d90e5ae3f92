//! Single-signature example for the Viafirma SDK.
//!
//! This example demonstrates:
//! - Creating a sandbox client
//! - Dispatching an inline base64 PDF to signature
//! - Polling the message status and full detail
//!
//! Run with:
//! ```bash
//! VIAFIRMA_USER=... VIAFIRMA_PASSWORD=... PDF_PATH=contract.pdf \
//!     cargo run --example single_signature
//! ```

use viafirma::{Client, Document};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user =
        std::env::var("VIAFIRMA_USER").expect("VIAFIRMA_USER environment variable required");
    let password = std::env::var("VIAFIRMA_PASSWORD")
        .expect("VIAFIRMA_PASSWORD environment variable required");
    let pdf_path = std::env::var("PDF_PATH").expect("PDF_PATH environment variable required");

    let client = Client::new(&user, &password);

    println!("Reading {pdf_path} ...");
    let pdf_bytes = std::fs::read(&pdf_path)?;
    let doc = Document::base64_from_bytes(&pdf_bytes).template_code("example-contract");

    println!("Dispatching document to signature...");
    let created = client.messages().dispatch("EXAMPLE-GROUP", &doc).await?;
    println!("Dispatch response: {created}");

    let Some(code) = created["code"].as_str() else {
        println!("No message code in response, stopping here.");
        return Ok(());
    };

    println!("\nChecking status of {code} ...");
    let status = client.messages().status(code).await?;
    println!("Status: {status}");

    println!("\nFetching full detail...");
    let detail = client.messages().get(code).await?;
    println!("Detail: {detail}");

    Ok(())
}
