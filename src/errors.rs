use axum::http::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("Please fill all required fields!")]
    MissingFields,

    #[error("You can only book appointments that are at least 3 hours in the future!")]
    TooSoon,

    #[error("You need to enter a valid phone number!")]
    InvalidPhoneFormat,

    #[error("You have entered a valid phone number, but it's not a mobile number! Provide a mobile number so we can contact you via SMS.")]
    NotMobile,

    #[error("Something went wrong while checking your phone number!")]
    LookupFailed,

    #[error("Error occurred while sending message!")]
    ReminderDispatchFailed,
}

impl RejectionReason {
    /// Fatal reasons are not correctable by the user and carry no field echo.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RejectionReason::ReminderDispatchFailed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::MissingFields => "missing_fields",
            RejectionReason::TooSoon => "too_soon",
            RejectionReason::InvalidPhoneFormat => "invalid_phone_format",
            RejectionReason::NotMobile => "not_mobile",
            RejectionReason::LookupFailed => "lookup_failed",
            RejectionReason::ReminderDispatchFailed => "reminder_dispatch_failed",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RejectionReason::MissingFields
            | RejectionReason::TooSoon
            | RejectionReason::InvalidPhoneFormat
            | RejectionReason::NotMobile => StatusCode::UNPROCESSABLE_ENTITY,
            RejectionReason::LookupFailed | RejectionReason::ReminderDispatchFailed => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}
