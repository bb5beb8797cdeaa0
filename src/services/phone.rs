use std::sync::Arc;

use crate::errors::RejectionReason;
use crate::models::{LineType, VerifiedContact};
use crate::services::messaging::{LookupError, NumberLookup};

/// Classifies a user-entered number through the lookup provider. Callers only ever see
/// `InvalidPhoneFormat`, `LookupFailed` or `NotMobile`; provider errors stop here.
pub struct PhoneVerifier {
    lookup: Arc<dyn NumberLookup>,
}

impl PhoneVerifier {
    pub fn new(lookup: Arc<dyn NumberLookup>) -> Self {
        Self { lookup }
    }

    pub async fn verify(
        &self,
        raw_number: &str,
        country_code: &str,
    ) -> Result<VerifiedContact, RejectionReason> {
        let info = match self.lookup.lookup(raw_number, country_code).await {
            Ok(info) => info,
            Err(LookupError::UnknownFormat) => {
                tracing::info!(number = raw_number, "phone number has unknown format");
                return Err(RejectionReason::InvalidPhoneFormat);
            }
            Err(LookupError::Other(e)) => {
                tracing::error!(error = %e, number = raw_number, "phone number lookup failed");
                return Err(RejectionReason::LookupFailed);
            }
        };

        let line_type = LineType::from_provider(&info.line_type);
        if line_type != LineType::Mobile {
            tracing::info!(
                number = raw_number,
                line_type = %info.line_type,
                "phone number is not a mobile line"
            );
            return Err(RejectionReason::NotMobile);
        }

        Ok(VerifiedContact {
            normalized_number: info.normalized_number,
            line_type,
        })
    }
}
