use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::models::AppointmentView;
use crate::state::AppState;

// GET /api/appointments
pub async fn list_appointments(State(state): State<Arc<AppState>>) -> Json<Vec<AppointmentView>> {
    let appointments = state.store.all();
    Json(appointments.iter().map(AppointmentView::from).collect())
}
