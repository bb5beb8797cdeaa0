use std::sync::{Mutex, PoisonError};

use crate::models::Appointment;

/// Append-only, process-lifetime record of confirmed appointments.
///
/// Appends are serialized by a mutex, so concurrent bookings land in the order their
/// append step completes and none is lost or duplicated. There is no update or delete.
#[derive(Default)]
pub struct AppointmentStore {
    appointments: Mutex<Vec<Appointment>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, appointment: Appointment) {
        // A panic elsewhere cannot leave a half-written Vec, so a poisoned lock is still usable.
        self.appointments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(appointment);
    }

    /// Snapshot in insertion order.
    pub fn all(&self) -> Vec<Appointment> {
        self.appointments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.appointments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
