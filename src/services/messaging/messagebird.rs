use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::{LookupError, MessagingProvider, NumberInfo, NumberLookup, ScheduledMessage};

/// MessageBird error code for a number it cannot parse.
const UNKNOWN_FORMAT_CODE: i64 = 21;

pub struct MessageBirdClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl MessageBirdClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            api_key,
            base_url,
            client,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url).context("invalid MessageBird base URL")?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("MessageBird base URL cannot have a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn access_key(&self) -> String {
        format!("AccessKey {}", self.api_key)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupBody {
    phone_number: Option<Value>,
    #[serde(rename = "type")]
    line_type: Option<String>,
    formats: Option<LookupFormats>,
}

#[derive(Deserialize)]
struct LookupFormats {
    e164: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    code: i64,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct MessageBody {
    id: Option<String>,
}

fn describe_errors(body: &str) -> (Option<i64>, String) {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => match parsed.errors.first() {
            Some(e) => (Some(e.code), e.description.clone()),
            None => (None, body.to_string()),
        },
        Err(_) => (None, body.to_string()),
    }
}

pub(crate) fn parse_lookup(status: StatusCode, body: &str) -> Result<NumberInfo, LookupError> {
    if !status.is_success() {
        let (code, description) = describe_errors(body);
        if code == Some(UNKNOWN_FORMAT_CODE) {
            return Err(LookupError::UnknownFormat);
        }
        return Err(anyhow::anyhow!("MessageBird lookup error ({status}): {description}").into());
    }

    let parsed: LookupBody =
        serde_json::from_str(body).context("failed to parse MessageBird lookup response")?;

    let normalized_number = parsed
        .formats
        .and_then(|f| f.e164)
        .or_else(|| match parsed.phone_number {
            Some(Value::Number(n)) => Some(format!("+{n}")),
            Some(Value::String(s)) if s.starts_with('+') => Some(s),
            Some(Value::String(s)) => Some(format!("+{s}")),
            _ => None,
        })
        .ok_or_else(|| anyhow::anyhow!("missing phone number in MessageBird lookup response"))?;

    Ok(NumberInfo {
        normalized_number,
        line_type: parsed.line_type.unwrap_or_else(|| "unknown".to_string()),
    })
}

pub(crate) fn parse_message(status: StatusCode, body: &str) -> anyhow::Result<Option<String>> {
    if !status.is_success() {
        let (_, description) = describe_errors(body);
        anyhow::bail!("MessageBird message error ({status}): {description}");
    }

    let parsed: MessageBody =
        serde_json::from_str(body).context("failed to parse MessageBird message response")?;
    Ok(parsed.id)
}

#[async_trait]
impl NumberLookup for MessageBirdClient {
    async fn lookup(&self, number: &str, country_code: &str) -> Result<NumberInfo, LookupError> {
        let url = self.endpoint(&["lookup", number])?;

        let mut request = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.access_key());
        if !country_code.is_empty() {
            request = request.query(&[("countryCode", country_code)]);
        }

        let resp = request
            .send()
            .await
            .context("failed to call MessageBird lookup")?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("failed to read MessageBird lookup response")?;

        tracing::debug!(%status, body = %body, "MessageBird lookup response");
        parse_lookup(status, &body)
    }
}

#[async_trait]
impl MessagingProvider for MessageBirdClient {
    async fn schedule_message(&self, message: &ScheduledMessage) -> anyhow::Result<Option<String>> {
        let url = self.endpoint(&["messages"])?;

        let resp = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.access_key())
            .json(message)
            .send()
            .await
            .context("failed to call MessageBird messages")?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("failed to read MessageBird message response")?;

        tracing::debug!(%status, body = %body, "MessageBird message response");
        parse_message(status, &body)
    }
}
