//! Booking lifecycle against a running server.
//!
//! These tests require:
//! - A running MongoDB with seeded hotels
//! - The booking site running (cargo run -p hotel-booking-web)

use reqwest::StatusCode;

use hotel_booking_integration_tests::{
    base_url, booking_id_from_location, client, hotel_ids, location,
};

const STAY: [(&str, &str); 4] = [
    ("name", "Jo"),
    ("email", "jo@x.com"),
    ("check_in_date", "2024-01-01"),
    ("check_out_date", "2024-01-05"),
];

async fn first_hotel_id(client: &reqwest::Client) -> String {
    let body = client
        .get(format!("{}/", base_url()))
        .send()
        .await
        .expect("Failed to get hotel list")
        .text()
        .await
        .expect("Failed to read response");

    hotel_ids(&body)
        .first()
        .expect("No hotels seeded")
        .to_hex()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running booking site"]
async fn test_health_endpoints() {
    let client = client();

    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to call /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to call /health/ready");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
#[ignore = "Requires running booking site and seeded hotels"]
async fn test_check_in_check_out_cancel() {
    let client = client();
    let base_url = base_url();
    let hotel_id = first_hotel_id(&client).await;

    // Check in
    let resp = client
        .post(format!("{base_url}/check_in/{hotel_id}"))
        .form(&STAY)
        .send()
        .await
        .expect("Failed to check in");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let details = location(&resp).expect("Missing Location header");
    let booking_id = booking_id_from_location(&details).expect("Unexpected redirect target");

    let body = client
        .get(format!("{base_url}{details}"))
        .send()
        .await
        .expect("Failed to get booking details")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("Jo"));
    assert!(body.contains("Checked in"));

    // Check out
    let resp = client
        .get(format!("{base_url}/check_out/{booking_id}"))
        .send()
        .await
        .expect("Failed to check out");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some(details.as_str()));

    let body = client
        .get(format!("{base_url}{details}"))
        .send()
        .await
        .expect("Failed to get booking details")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("Checked out"));

    // Checking out again still redirects and leaves the booking checked out
    let resp = client
        .get(format!("{base_url}/check_out/{booking_id}"))
        .send()
        .await
        .expect("Failed to check out twice");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some(details.as_str()));

    let body = client
        .get(format!("{base_url}{details}"))
        .send()
        .await
        .expect("Failed to get booking details")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("Checked out"));
    assert!(!body.contains("/check_out/"));

    // Change dates after check-out is still allowed
    let resp = client
        .post(format!("{base_url}/change_reservation/{booking_id}"))
        .form(&[
            ("check_in_date", "2024-02-10"),
            ("check_out_date", "2024-02-12"),
        ])
        .send()
        .await
        .expect("Failed to change reservation");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let body = client
        .get(format!("{base_url}{details}"))
        .send()
        .await
        .expect("Failed to get booking details")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("2024-02-10"));
    assert!(body.contains("2024-02-12"));

    // Cancel
    let resp = client
        .get(format!("{base_url}/cancel_booking/{booking_id}"))
        .send()
        .await
        .expect("Failed to cancel booking");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/"));

    let body = client
        .get(format!("{base_url}{details}"))
        .send()
        .await
        .expect("Failed to get booking details")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("Booking not found"));
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
#[ignore = "Requires running booking site and seeded hotels"]
async fn test_check_in_with_invalid_date_is_rejected() {
    let client = client();
    let hotel_id = first_hotel_id(&client).await;

    let resp = client
        .post(format!("{}/check_in/{hotel_id}", base_url()))
        .form(&[
            ("name", "Jo"),
            ("email", "jo@x.com"),
            ("check_in_date", "2024-13-40"),
            ("check_out_date", "2024-01-05"),
        ])
        .send()
        .await
        .expect("Failed to post check-in");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running booking site"]
async fn test_malformed_booking_id_is_rejected() {
    let resp = client()
        .get(format!("{}/booking_details/not-an-id", base_url()))
        .send()
        .await
        .expect("Failed to get booking details");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
