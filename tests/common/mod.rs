#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use beautybird::config::AppConfig;
use beautybird::models::BookingRequest;
use beautybird::services::booking::{BookingPipeline, PipelineSettings};
use beautybird::services::messaging::{
    LookupError, MessagingProvider, NumberInfo, NumberLookup, ScheduledMessage,
};
use beautybird::services::time_math::FixedClock;
use beautybird::state::AppState;
use beautybird::store::AppointmentStore;

// ── Mock Providers ──

#[derive(Clone)]
pub enum LookupReply {
    Line {
        normalized: &'static str,
        line_type: &'static str,
    },
    UnknownFormat,
    Broken,
}

pub struct MockLookup {
    reply: LookupReply,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockLookup {
    pub fn new(reply: LookupReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn mobile(normalized: &'static str) -> Self {
        Self::new(LookupReply::Line {
            normalized,
            line_type: "mobile",
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl NumberLookup for MockLookup {
    async fn lookup(&self, number: &str, country_code: &str) -> Result<NumberInfo, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((number.to_string(), country_code.to_string()));

        // Give concurrent submissions a chance to interleave.
        tokio::task::yield_now().await;

        match &self.reply {
            LookupReply::Line {
                normalized,
                line_type,
            } => Ok(NumberInfo {
                normalized_number: normalized.to_string(),
                line_type: line_type.to_string(),
            }),
            LookupReply::UnknownFormat => Err(LookupError::UnknownFormat),
            LookupReply::Broken => Err(LookupError::Other(anyhow::anyhow!("lookup service down"))),
        }
    }
}

pub struct MockMessaging {
    fail: bool,
    pub sent: Mutex<Vec<ScheduledMessage>>,
}

impl MockMessaging {
    pub fn new() -> Self {
        Self {
            fail: false,
            sent: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(vec![]),
        }
    }

    pub fn sent(&self) -> Vec<ScheduledMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingProvider for MockMessaging {
    async fn schedule_message(&self, message: &ScheduledMessage) -> anyhow::Result<Option<String>> {
        self.sent.lock().unwrap().push(message.clone());
        tokio::task::yield_now().await;
        if self.fail {
            anyhow::bail!("MessageBird API returned error");
        }
        Ok(Some(format!("msg-{}", self.sent.lock().unwrap().len())))
    }
}

// ── Helpers ──

pub const COUNTRY_CODE: &str = "NL";

pub fn jane() -> BookingRequest {
    BookingRequest {
        name: "Jane".to_string(),
        treatment: "Haircut".to_string(),
        number: "+31612345678".to_string(),
        date: "2024-05-01".to_string(),
        time: "14:10".to_string(),
    }
}

pub fn clock_at(local: &str) -> Arc<FixedClock> {
    Arc::new(FixedClock::at(local, 0).unwrap())
}

pub struct Harness {
    pub lookup: Arc<MockLookup>,
    pub messaging: Arc<MockMessaging>,
    pub store: Arc<AppointmentStore>,
    pub clock: Arc<FixedClock>,
}

impl Harness {
    pub fn new(lookup: MockLookup, messaging: MockMessaging, now_local: &str) -> Self {
        Self {
            lookup: Arc::new(lookup),
            messaging: Arc::new(messaging),
            store: Arc::new(AppointmentStore::new()),
            clock: clock_at(now_local),
        }
    }

    pub fn pipeline(&self) -> BookingPipeline {
        BookingPipeline::new(
            self.lookup.clone(),
            self.messaging.clone(),
            self.clock.clone(),
            self.store.clone(),
            PipelineSettings {
                country_code: COUNTRY_CODE.to_string(),
                originator: "BeautyBird".to_string(),
            },
        )
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::new(AppState {
            config: test_config(),
            clock: self.clock.clone(),
            store: self.store.clone(),
            pipeline: self.pipeline(),
        })
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 8080,
        messagebird_api_key: "test-key".to_string(),
        messagebird_base_url: "http://localhost:0".to_string(),
        country_code: COUNTRY_CODE.to_string(),
        reminder_originator: "BeautyBird".to_string(),
        provider_timeout: std::time::Duration::from_secs(1),
    }
}
