use crate::errors::RejectionReason;
use crate::models::{BookingRequest, ValidatedBooking};
use crate::services::time_math::{self, Clock};

/// Check required fields and the minimum lead time. An unparsable date/time is reported
/// the same way as a missing one.
pub fn validate(
    request: &BookingRequest,
    clock: &dyn Clock,
) -> Result<ValidatedBooking, RejectionReason> {
    let fields = [
        &request.name,
        &request.treatment,
        &request.number,
        &request.date,
        &request.time,
    ];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(RejectionReason::MissingFields);
    }

    let appointment_at = time_math::parse_appointment(clock, &request.date, &request.time)
        .ok_or(RejectionReason::MissingFields)?;

    if appointment_at < time_math::earliest_bookable(clock.now()) {
        return Err(RejectionReason::TooSoon);
    }

    Ok(ValidatedBooking {
        request: request.clone(),
        appointment_at,
    })
}
