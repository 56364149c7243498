use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::errors::AppError;
use crate::models::{BookingRecord, BookingRequest, BookingStatus};
use crate::services::progress::{self, ProgressView};
use crate::state::AppState;

// POST /api/bookings

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingBody {
    pub service_id: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub vehicle: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Serialize)]
pub struct SubmitBookingResponse {
    pub booking: BookingRecord,
    pub whatsapp_url: String,
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubmitBookingBody>,
) -> Result<Json<SubmitBookingResponse>, AppError> {
    let service = catalog::find_service(&body.service_id)
        .ok_or_else(|| AppError::Validation(format!("unknown service: {}", body.service_id)))?;

    tracing::info!(service = service.name, "booking submission");

    let request = BookingRequest {
        date: body.date,
        time: body.time,
        name: body.name,
        phone: body.phone,
        vehicle: body.vehicle,
        color: body.color,
        notes: body.notes,
    };

    let booking = state
        .ledger
        .submit(&request, service.name, &state.config.working_hours)
        .await?;

    // The deep link is the business's only notification channel, so a
    // saved record must always come back with one.
    let whatsapp_url = state
        .notifier
        .notify_booking(&booking)
        .await
        .map_err(|e| AppError::Notification(e.to_string()))?;

    Ok(Json(SubmitBookingResponse {
        booking,
        whatsapp_url,
    }))
}

// GET /api/bookings?phone=…

#[derive(Deserialize)]
pub struct TrackQuery {
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct TrackedBooking {
    #[serde(flatten)]
    pub booking: BookingRecord,
    pub progress: ProgressView,
}

pub async fn find_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrackQuery>,
) -> Result<Json<Vec<TrackedBooking>>, AppError> {
    let phone = query.phone.unwrap_or_default();
    let records = state.ledger.find_by_phone(&phone)?;

    let response = records
        .into_iter()
        .map(|booking| TrackedBooking {
            progress: progress::project(booking.status),
            booking,
        })
        .collect();

    Ok(Json(response))
}

// POST /api/admin/bookings/:id/status

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub status: BookingStatus,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<UpdateStatusBody>,
) -> Result<Json<BookingRecord>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let updated = state.ledger.update_status(id, body.status)?;
    Ok(Json(updated))
}
