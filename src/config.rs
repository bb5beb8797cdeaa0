use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub messagebird_api_key: String,
    pub messagebird_base_url: String,
    /// Default country for locally formatted numbers, e.g. "NL". Empty means none.
    pub country_code: String,
    pub reminder_originator: String,
    pub provider_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            messagebird_api_key: env::var("MESSAGEBIRD_API_KEY").unwrap_or_default(),
            messagebird_base_url: env::var("MESSAGEBIRD_BASE_URL")
                .unwrap_or_else(|_| "https://rest.messagebird.com".to_string()),
            country_code: env::var("COUNTRY_CODE").unwrap_or_default(),
            reminder_originator: env::var("REMINDER_ORIGINATOR")
                .unwrap_or_else(|_| "BeautyBird".to_string()),
            provider_timeout: Duration::from_secs(
                env::var("PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}
