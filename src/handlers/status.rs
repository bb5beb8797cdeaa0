use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::services::time_math;
use crate::state::AppState;

// GET /api/status
#[derive(Serialize)]
pub struct StatusResponse {
    appointments_count: usize,
    country_code: String,
    reminder_originator: String,
    server_time: String,
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        appointments_count: state.store.len(),
        country_code: state.config.country_code.clone(),
        reminder_originator: state.config.reminder_originator.clone(),
        server_time: time_math::format_iso(&state.clock.now()),
    })
}
