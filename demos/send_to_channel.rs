use std::io;
use std::time::Duration;

use notify_sms::{ChannelMessage, Credentials, NotifyClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::new(
        required_env("NOTIFY_USERNAME")?,
        required_env("NOTIFY_PASSWORD")?,
    )?;
    let sender_id = required_env("NOTIFY_SENDER_ID")?;
    let channel = required_env("NOTIFY_CHANNEL")?;
    let message = std::env::var("NOTIFY_MESSAGE")
        .unwrap_or_else(|_| "Hello from the notify-sms demo.".to_owned());

    let mut builder = NotifyClient::builder(credentials).timeout(Duration::from_secs(10));
    if let Ok(base_url) = std::env::var("NOTIFY_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.connect().await?;

    client
        .send_to_channel(ChannelMessage {
            sender_id,
            message,
            channel,
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
