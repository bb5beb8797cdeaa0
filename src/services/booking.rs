use std::sync::Arc;

use crate::errors::RejectionReason;
use crate::models::{Appointment, BookingOutcome, BookingRequest};
use crate::services::messaging::{MessagingProvider, NumberLookup};
use crate::services::phone::PhoneVerifier;
use crate::services::reminder::ReminderScheduler;
use crate::services::time_math::{format_display, Clock};
use crate::services::validation;
use crate::store::AppointmentStore;

#[derive(Clone, Debug)]
pub struct PipelineSettings {
    /// Country hint for numbers entered without an international prefix.
    pub country_code: String,
    /// Sender identity shown on reminder messages.
    pub originator: String,
}

/// Runs one booking submission through validation, phone verification, reminder scheduling
/// and recording. Each call owns its own request; the store is the only shared state.
pub struct BookingPipeline {
    clock: Arc<dyn Clock>,
    verifier: PhoneVerifier,
    scheduler: ReminderScheduler,
    store: Arc<AppointmentStore>,
    country_code: String,
}

impl BookingPipeline {
    pub fn new(
        lookup: Arc<dyn NumberLookup>,
        messaging: Arc<dyn MessagingProvider>,
        clock: Arc<dyn Clock>,
        store: Arc<AppointmentStore>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            verifier: PhoneVerifier::new(lookup),
            scheduler: ReminderScheduler::new(messaging, clock.clone(), settings.originator),
            clock,
            store,
            country_code: settings.country_code,
        }
    }

    pub async fn submit(&self, request: BookingRequest) -> BookingOutcome {
        // Received -> Validated
        let validated = match validation::validate(&request, self.clock.as_ref()) {
            Ok(v) => v,
            Err(reason) => return settle(reason, request),
        };

        // Validated -> PhoneVerified
        let contact = match self
            .verifier
            .verify(&validated.request.number, &self.country_code)
            .await
        {
            Ok(c) => c,
            Err(reason) => return settle(reason, validated.request),
        };

        // PhoneVerified -> ReminderScheduled
        let reminder = match self
            .scheduler
            .schedule_reminder(
                &contact,
                validated.appointment_at,
                &validated.request.name,
                &validated.request.treatment,
            )
            .await
        {
            Ok(r) => r,
            Err(reason) => return settle(reason, validated.request),
        };

        // ReminderScheduled -> Confirmed
        let BookingRequest {
            name,
            treatment,
            number,
            ..
        } = validated.request;
        let appointment = Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            treatment,
            number,
            appointment_at: validated.appointment_at,
            remind_at: reminder.remind_at,
        };
        self.store.append(appointment.clone());

        tracing::info!(
            id = %appointment.id,
            name = %appointment.name,
            treatment = %appointment.treatment,
            at = %format_display(&appointment.appointment_at),
            "appointment confirmed"
        );

        BookingOutcome::Confirmed(appointment)
    }
}

/// Terminal outcome for a stage failure. Fatal reasons drop the submitted fields.
fn settle(reason: RejectionReason, fields: BookingRequest) -> BookingOutcome {
    if reason.is_fatal() {
        tracing::error!(
            reason = reason.as_str(),
            number = %fields.number,
            "booking failed after validation"
        );
        return BookingOutcome::Failed;
    }

    tracing::warn!(reason = reason.as_str(), number = %fields.number, "booking rejected");
    BookingOutcome::Rejected { reason, fields }
}
