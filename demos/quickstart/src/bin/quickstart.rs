use chrono::Utc;
use prettytable::{Table, row};
use radiusdesk_client::prelude::*;
use radiusdesk_client::utils::{config_from_env, get_env_or_default, setup_logger};

/// Loads `RADIUSDESK_*` variables, falling back to an example instance
fn load_config() -> (Config, u64, u64) {
    let config = config_from_env().unwrap_or_else(|e| {
        warn!("{}, using example configuration", e);
        Config::new(
            "https://radiusdesk.example.com",
            "admin",
            "your-password",
            "1",
        )
    });
    let realm_id = get_env_or_default("RADIUSDESK_REALM_ID", 1u64);
    let profile_id = get_env_or_default("RADIUSDESK_PROFILE_ID", 2u64);
    (config, realm_id, profile_id)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => println!("Configuration loaded from .env file\n"),
        Err(_) => {
            println!("No .env file found, using example configuration...");
            println!("To use your own instance, create a .env file\n");
        }
    }
    setup_logger();

    let (config, realm_id, profile_id) = load_config();
    let client = Client::new_lazy(config)?;
    info!("Using {}", client.base_url());

    if !client.check_connection().await {
        error!("Connection failed");
        std::process::exit(1);
    }
    info!("✓ Connected to RadiusDesk");

    // Vouchers
    let voucher = client
        .vouchers()
        .create(&CreateVoucherRequest::new(realm_id, profile_id, 1))
        .await?;
    let code = voucher.name.clone().unwrap_or_default();
    info!("Created voucher: {} (ID: {:?})", code, voucher.id);

    let vouchers = client.vouchers().list(5, None).await?;
    let mut table = Table::new();
    table.add_row(row!["ID", "CODE", "PROFILE", "STATUS"]);
    for v in vouchers.iter() {
        table.add_row(row![
            v.id.map(|id| id.to_string()).unwrap_or_default(),
            v.name.as_deref().unwrap_or("N/A"),
            v.profile.as_deref().unwrap_or("N/A"),
            v.status.as_deref().unwrap_or("N/A")
        ]);
    }
    println!("Total vouchers: {}", vouchers.total_count);
    table.printstd();

    let details = client.vouchers().get_details(&code).await?;
    info!("Details: {}", details);

    if let Some(id) = voucher.id {
        match client.vouchers().delete(id).await {
            Ok(result) if result.success => info!("✓ Deleted voucher ID: {}", id),
            Ok(result) => warn!("Delete result: {}", result),
            Err(e) => error!("Failed to delete voucher: {}", e),
        }
    }

    // Permanent users
    let username = format!("test_user_{}", Utc::now().timestamp());
    let user = client
        .users()
        .create(
            &CreateUserRequest::new(&username, "securepassword123", realm_id, profile_id)
                .with_name("Test")
                .with_surname("User")
                .with_email("test@example.com"),
        )
        .await?;
    info!("Created user: {}", username);

    let users = client.users().list(5, None).await?;
    let mut table = Table::new();
    table.add_row(row!["ID", "USERNAME", "NAME", "ACTIVE"]);
    for u in users.iter() {
        table.add_row(row![
            u.id.map(|id| id.to_string()).unwrap_or_default(),
            u.username.as_deref().unwrap_or("N/A"),
            u.full_name().unwrap_or_default(),
            u.active.map(|a| a.to_string()).unwrap_or_default()
        ]);
    }
    println!("Total users: {}", users.total_count);
    table.printstd();

    if let Some(id) = user.id {
        let result = client.users().delete(id).await?;
        if result.success {
            info!("✓ Deleted user ID: {}", id);
        } else {
            warn!("Delete result: {}", result);
        }
    }

    info!("All operations completed successfully");
    Ok(())
}
