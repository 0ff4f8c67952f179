use std::io;

use notify_sms::NotifyClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("NOTIFY_USERNAME")?;
    let password = required_env("NOTIFY_PASSWORD")?;

    let client = NotifyClient::connect(username, password).await?;
    for sender in client.list_senders().await? {
        println!(
            "{} {:?} status={} active={}",
            sender.id, sender.title, sender.status, sender.active
        );
    }

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
