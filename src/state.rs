use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::booking::BookingPipeline;
use crate::services::time_math::Clock;
use crate::store::AppointmentStore;

pub struct AppState {
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
    pub store: Arc<AppointmentStore>,
    pub pipeline: BookingPipeline,
}
