//! Optional document-store connection.
//!
//! Nothing on the request path reads or writes through this connection. It is
//! opened once at startup for future features, and its failure is only logged.

use mongodb::{Client, bson::doc};
use tokio::task::JoinHandle;

/// Connect to `uri` and ping the default database (or `admin` when the URI
/// names none).
pub async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database("admin"));

    database.run_command(doc! { "ping": 1 }).await?;
    Ok(client)
}

/// Start the connection attempt on its own task so it never delays serving.
pub fn spawn_connect(uri: String) -> JoinHandle<Option<Client>> {
    tokio::spawn(async move {
        match connect(&uri).await {
            Ok(client) => {
                tracing::info!("✓ Document store connected");
                Some(client)
            }
            Err(e) => {
                tracing::warn!("✗ Document store not connected: {}", e);
                None
            }
        }
    })
}
