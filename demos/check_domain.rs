use internetbs_sdk_rs::InternetBsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let key = std::env::args().nth(2);
    let password = std::env::args().nth(3);
    let client = InternetBsClient::new(key.as_deref(), password.as_deref())?;
    println!("Using {:?} endpoint {}", client.environment(), client.base_url());

    let domain = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example-for-sale.com".to_string());
    println!("\nChecking domain: {}", domain);

    match client.domain_check_raw(&domain).await {
        Ok(response) => {
            let status = response["status"].as_str().unwrap_or("UNKNOWN");
            if status == "AVAILABLE" {
                println!("\n✓ {} is available", domain);
            } else {
                println!("\n✗ {} is not available ({})", domain, status);
            }
            println!("\n{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            eprintln!("\n✗ Error checking domain: {}", e);
        }
    }

    Ok(())
}
