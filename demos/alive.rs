//! Liveness probe example for the Viafirma SDK.
//!
//! Run with:
//! ```bash
//! VIAFIRMA_USER=... VIAFIRMA_PASSWORD=... cargo run --example alive
//! ```

use viafirma::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let user =
        std::env::var("VIAFIRMA_USER").expect("VIAFIRMA_USER environment variable required");
    let password = std::env::var("VIAFIRMA_PASSWORD")
        .expect("VIAFIRMA_PASSWORD environment variable required");

    let client = Client::new(&user, &password);
    println!("Probing {} ...", client.base_url());

    let response = client.is_alive().await?;
    println!("Service responded with status {}", response.status());

    Ok(())
}
