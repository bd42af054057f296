//! Hotel list and booking form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::Hotel;
use crate::services::BookingService;
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Hotel display data for templates.
#[derive(Clone)]
pub struct HotelView {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
}

impl From<Hotel> for HotelView {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.to_hex(),
            name: hotel.name,
            city: hotel.city,
            description: hotel.description,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Hotel list page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub hotels: Vec<HotelView>,
}

/// Booking form page template.
///
/// `hotel` is `None` when the id is well-formed but no hotel has it.
#[derive(Template, WebTemplate)]
#[template(path = "book.html")]
pub struct BookTemplate {
    pub hotel: Option<HotelView>,
}

// =============================================================================
// Route Handlers
// =============================================================================

/// Display every hotel.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let hotels = BookingService::new(state.store()).list_hotels().await?;

    Ok(IndexTemplate {
        hotels: hotels.into_iter().map(HotelView::from).collect(),
    })
}

/// Display the booking form for one hotel.
#[instrument(skip(state))]
pub async fn book(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse> {
    let hotel = BookingService::new(state.store()).hotel(&hotel_id).await?;

    Ok(BookTemplate {
        hotel: hotel.map(HotelView::from),
    })
}
