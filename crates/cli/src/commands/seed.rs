//! Seed the database with hotels.
//!
//! Hotels are read from a YAML file shaped like:
//!
//! ```yaml
//! hotels:
//!   - name: Seaside Inn
//!     city: Lisbon
//!     description: Twelve rooms facing the Tagus.
//!   - name: Harbor View
//! ```
//!
//! `city` and `description` are optional.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use hotel_booking_web::db::HotelRepository;
use hotel_booking_web::models::NewHotel;

/// Top-level shape of a hotel seed file.
#[derive(Debug, Deserialize)]
pub struct HotelSeedFile {
    pub hotels: Vec<NewHotel>,
}

/// Problems found in a seed file before anything is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("hotel #{0} has an empty name")]
    EmptyName(usize),
    #[error("seed file contains no hotels")]
    NoHotels,
}

/// Check every hotel in a seed file, returning all problems found.
#[must_use]
pub fn validate(seed: &HotelSeedFile) -> Vec<SeedError> {
    if seed.hotels.is_empty() {
        return vec![SeedError::NoHotels];
    }

    seed.hotels
        .iter()
        .enumerate()
        .filter(|(_, hotel)| hotel.name.trim().is_empty())
        .map(|(index, _)| SeedError::EmptyName(index + 1))
        .collect()
}

/// Seed hotels from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML file
/// * `clear_existing` - If true, delete every existing hotel first
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation, or if
/// database operations fail.
pub async fn hotels(file_path: &str, clear_existing: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading hotels from file");

    // Read and validate YAML before connecting to database
    let content = tokio::fs::read_to_string(path).await?;
    let seed: HotelSeedFile = serde_yaml::from_str(&content)?;

    let errors = validate(&seed);
    if !errors.is_empty() {
        error!("Seed file validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(format!("{} validation errors found", errors.len()).into());
    }

    info!(hotels = seed.hotels.len(), "Seed file validated");

    let database = super::connect().await?;
    let repo = HotelRepository::new(&database);

    if clear_existing {
        let deleted = repo.delete_all().await?;
        info!(deleted, "Cleared existing hotels");
    }

    let inserted = repo.insert_many(seed.hotels).await?;
    info!(inserted, "Seeding complete!");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_file() {
        let seed: HotelSeedFile = serde_yaml::from_str(
            "hotels:\n  - name: Seaside Inn\n    city: Lisbon\n  - name: Harbor View\n",
        )
        .unwrap();

        assert_eq!(seed.hotels.len(), 2);
        assert_eq!(seed.hotels[0].city.as_deref(), Some("Lisbon"));
        assert_eq!(seed.hotels[1].description, None);
        assert!(validate(&seed).is_empty());
    }

    #[test]
    fn test_validate_reports_blank_names() {
        let seed: HotelSeedFile =
            serde_yaml::from_str("hotels:\n  - name: Seaside Inn\n  - name: \"  \"\n").unwrap();

        assert_eq!(validate(&seed), vec![SeedError::EmptyName(2)]);
    }

    #[test]
    fn test_validate_rejects_empty_file() {
        let seed: HotelSeedFile = serde_yaml::from_str("hotels: []\n").unwrap();
        assert_eq!(validate(&seed), vec![SeedError::NoHotels]);
    }

    #[test]
    fn test_bundled_seed_file_is_valid() {
        let content = include_str!("../../seed/hotels.yaml");
        let seed: HotelSeedFile = serde_yaml::from_str(content).unwrap();
        assert!(validate(&seed).is_empty());
    }
}
