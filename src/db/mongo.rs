use mongodb::{bson::doc, options::ClientOptions, Client};

/// Creates a MongoDB client and verifies the server is reachable
///
/// The driver connects lazily, so a `ping` is issued up front to surface
/// bad URIs and unreachable servers before any query runs.
pub async fn create_client(uri: &str) -> anyhow::Result<Client> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    tracing::info!("Connected to MongoDB");
    Ok(client)
}
