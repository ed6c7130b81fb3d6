use internetbs_sdk_rs::{InternetBsClient, Params, make_fake_contact_data_with_email};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Sandbox only; nothing here is billed
    let client = InternetBsClient::new(None, None)?;
    let domain = "sdk-demo-example.com";

    if client.domain_check(domain).await? {
        println!("Registering {} in the sandbox...", domain);
        let contacts = make_fake_contact_data_with_email("hostmaster@sdk-demo-example.com");
        let created = client.domain_create(domain, &contacts, &Params::new()).await?;
        println!("  Created: {}", created);
    }

    let record = format!("www.{}", domain);
    let extra = Params::from([("Ttl".to_string(), "3600".to_string())]);

    println!("\nAdding A record for {}", record);
    let added = client.dns_add(&record, "A", Some("192.0.2.10"), &extra).await?;
    println!("  Added: {}", added);

    println!("\nUpdating A record for {}", record);
    let mut update = extra.clone();
    update.insert("CurrentValue".to_string(), "192.0.2.10".to_string());
    let updated = client.dns_update(&record, "A", Some("192.0.2.20"), &update).await?;
    println!("  Updated: {}", updated);

    println!("\nRemoving A records for {}", record);
    let removed = client.dns_remove_raw(&record, "A", None, &Params::new()).await?;
    println!("{}", serde_json::to_string_pretty(&removed)?);

    Ok(())
}
