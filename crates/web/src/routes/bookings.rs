//! Booking lifecycle handlers.
//!
//! Every handler performs exactly one service call. Mutations answer with a
//! `303 See Other` so a browser refresh never resubmits a form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use hotel_booking_core::{BookingId, BookingStatus};

use crate::error::Result;
use crate::filters;
use crate::models::Booking;
use crate::services::{BookingService, GuestDetails};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Booking form data.
#[derive(Debug, Deserialize)]
pub struct CheckInForm {
    pub name: String,
    pub email: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

/// Date change form data.
#[derive(Debug, Deserialize)]
pub struct ChangeReservationForm {
    pub check_in_date: String,
    pub check_out_date: String,
}

// =============================================================================
// View Types
// =============================================================================

/// Booking display data for templates.
#[derive(Clone)]
pub struct BookingView {
    pub id: String,
    pub hotel_id: String,
    pub guest_name: String,
    pub guest_email: String,
    /// `YYYY-MM-DD`, ready for `<input type="date">`.
    pub check_in_date: String,
    /// `YYYY-MM-DD`, ready for `<input type="date">`.
    pub check_out_date: String,
    /// Negative when the dates are reversed.
    pub nights: i64,
    pub status: String,
    pub status_label: String,
    pub is_checked_in: bool,
}

impl From<Booking> for BookingView {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_hex(),
            hotel_id: booking.hotel_id.to_hex(),
            guest_name: booking.guest_name,
            guest_email: booking.guest_email,
            check_in_date: booking.check_in_date.to_string(),
            check_out_date: booking.check_out_date.to_string(),
            nights: booking.check_in_date.nights_until(&booking.check_out_date),
            status: booking.status.as_str().to_owned(),
            status_label: booking.status.label().to_owned(),
            is_checked_in: booking.status == BookingStatus::CheckedIn,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Booking detail page template.
///
/// `booking` is `None` when no booking has the requested id.
#[derive(Template, WebTemplate)]
#[template(path = "booking_details.html")]
pub struct BookingDetailsTemplate {
    pub booking: Option<BookingView>,
}

fn details_url(id: BookingId) -> String {
    format!("/booking_details/{id}")
}

// =============================================================================
// Route Handlers
// =============================================================================

/// Create a booking and show it.
#[instrument(skip(state, form))]
pub async fn check_in(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
    Form(form): Form<CheckInForm>,
) -> Result<Redirect> {
    let booking = BookingService::new(state.store())
        .check_in(
            &hotel_id,
            GuestDetails {
                name: &form.name,
                email: &form.email,
                check_in_date: &form.check_in_date,
                check_out_date: &form.check_out_date,
            },
        )
        .await?;

    Ok(Redirect::to(&details_url(booking.id)))
}

/// Display a booking.
#[instrument(skip(state))]
pub async fn details(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse> {
    let booking = BookingService::new(state.store())
        .booking(&booking_id)
        .await?;

    Ok(BookingDetailsTemplate {
        booking: booking.map(BookingView::from),
    })
}

/// Mark a booking as checked out.
#[instrument(skip(state))]
pub async fn check_out(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Redirect> {
    let id = BookingService::new(state.store())
        .check_out(&booking_id)
        .await?;

    Ok(Redirect::to(&details_url(id)))
}

/// Replace a booking's dates.
#[instrument(skip(state, form))]
pub async fn change_reservation(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    Form(form): Form<ChangeReservationForm>,
) -> Result<Redirect> {
    let id = BookingService::new(state.store())
        .change_reservation(&booking_id, &form.check_in_date, &form.check_out_date)
        .await?;

    Ok(Redirect::to(&details_url(id)))
}

/// Delete a booking and return to the hotel list.
#[instrument(skip(state))]
pub async fn cancel(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Redirect> {
    BookingService::new(state.store()).cancel(&booking_id).await?;

    Ok(Redirect::to("/"))
}
