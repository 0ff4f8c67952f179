use std::io;

use notify_sms::{ContactsMessage, NotifyClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("NOTIFY_USERNAME")?;
    let password = required_env("NOTIFY_PASSWORD")?;
    let sender_id = required_env("NOTIFY_SENDER_ID")?;
    let contacts = required_env("NOTIFY_CONTACTS")?
        .split(',')
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let message = std::env::var("NOTIFY_MESSAGE")
        .unwrap_or_else(|_| "Hello from the notify-sms demo.".to_owned());

    let client = NotifyClient::connect(username, password).await?;
    client
        .send_to_contacts(ContactsMessage {
            sender_id,
            message,
            contacts,
        })
        .await?;
    println!("message accepted");

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
