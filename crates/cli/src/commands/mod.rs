//! CLI command implementations.
//!
//! # Environment Variables
//!
//! - `MONGO_URI` - MongoDB connection string
//! - `MONGO_DBNAME` - Database holding the `hotels` and `bookings` collections

pub mod ping;
pub mod seed;

use secrecy::SecretString;

use hotel_booking_web::db::{self, Database};

/// Connect to the database named by `MONGO_URI` and `MONGO_DBNAME`.
///
/// # Errors
///
/// Returns an error if either variable is missing or the URI is invalid.
pub async fn connect() -> Result<Database, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mongo_uri = std::env::var("MONGO_URI")
        .map(SecretString::from)
        .map_err(|_| "MONGO_URI not set")?;
    let db_name = std::env::var("MONGO_DBNAME").map_err(|_| "MONGO_DBNAME not set")?;

    tracing::info!(database = %db_name, "Connecting to MongoDB");
    Ok(db::connect(&mongo_uri, &db_name).await?)
}
