use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Serialize;

use crate::errors::RejectionReason;
use crate::models::{AppointmentView, BookingOutcome, BookingRequest};
use crate::services::time_math;
use crate::state::AppState;

// GET /
#[derive(Serialize)]
pub struct FormDefaults {
    pub date: String,
    pub time: String,
}

/// Prefill values for the booking form, a little past the minimum lead time.
pub async fn form_defaults(State(state): State<Arc<AppState>>) -> Json<FormDefaults> {
    let default_dt = state.clock.to_local(time_math::form_default(state.clock.now()));
    Json(FormDefaults {
        date: default_dt.format("%Y-%m-%d").to_string(),
        time: time_math::format_clock(&default_dt),
    })
}

// POST /book
#[derive(Serialize)]
struct RejectedResponse {
    error: String,
    reason: &'static str,
    #[serde(flatten)]
    fields: BookingRequest,
}

pub async fn book(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BookingRequest>,
) -> Response {
    tracing::info!(name = %form.name, treatment = %form.treatment, "incoming booking");

    match state.pipeline.submit(form).await {
        BookingOutcome::Confirmed(appointment) => {
            Json(AppointmentView::from(&appointment)).into_response()
        }
        BookingOutcome::Rejected { reason, fields } => (
            reason.status_code(),
            Json(RejectedResponse {
                error: reason.to_string(),
                reason: reason.as_str(),
                fields,
            }),
        )
            .into_response(),
        BookingOutcome::Failed => (
            StatusCode::BAD_GATEWAY,
            RejectionReason::ReminderDispatchFailed.to_string(),
        )
            .into_response(),
    }
}
