//! Connectivity check.

use tracing::info;

use hotel_booking_web::db;

/// Ping the configured database.
///
/// # Errors
///
/// Returns an error if configuration is missing or the server is unreachable.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database = super::connect().await?;
    db::ping(&database).await?;

    info!(database = %database.name(), "MongoDB is reachable");
    Ok(())
}
