use async_trait::async_trait;
use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use crate::booking::lead::SubmittedLead;
use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not encode lead: {0}")]
    Encode(String),
}

/// Where a validated, verified lead ends up.
#[async_trait(?Send)]
pub trait LeadSink {
    async fn submit(&self, lead: &SubmittedLead) -> Result<(), SubmitError>;
}

/// Stands in for the spreadsheet integration: waits, logs the payload, succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSheetsSink {
    pub delay_ms: u32,
}

impl Default for MockSheetsSink {
    fn default() -> Self {
        Self { delay_ms: config::MOCK_SUBMIT_DELAY_MS }
    }
}

#[async_trait(?Send)]
impl LeadSink for MockSheetsSink {
    async fn submit(&self, lead: &SubmittedLead) -> Result<(), SubmitError> {
        if self.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }
        let payload = serde_json::to_string_pretty(lead)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;
        info!("Data submitted to Google Sheets: {}", payload);
        Ok(())
    }
}

/// Posts the lead as JSON to a collection endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSink {
    pub url: String,
}

#[async_trait(?Send)]
impl LeadSink for HttpSink {
    async fn submit(&self, lead: &SubmittedLead) -> Result<(), SubmitError> {
        let response = Request::post(&self.url)
            .json(lead)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            gloo_console::error!("Lead endpoint rejected submission:", response.status());
            Err(SubmitError::Status(response.status()))
        }
    }
}

/// Either sink, picked from the build configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguredSink {
    Mock(MockSheetsSink),
    Http(HttpSink),
}

impl ConfiguredSink {
    pub fn from_config() -> Self {
        match config::lead_submit_url() {
            Some(url) => ConfiguredSink::Http(HttpSink { url }),
            None => ConfiguredSink::Mock(MockSheetsSink::default()),
        }
    }
}

#[async_trait(?Send)]
impl LeadSink for ConfiguredSink {
    async fn submit(&self, lead: &SubmittedLead) -> Result<(), SubmitError> {
        match self {
            ConfiguredSink::Mock(sink) => sink.submit(lead).await,
            ConfiguredSink::Http(sink) => sink.submit(lead).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::lead::LeadRecord;
    use futures::executor::block_on;

    #[test]
    fn mock_sink_without_delay_succeeds() {
        let sink = MockSheetsSink { delay_ms: 0 };
        let lead = LeadRecord { name: "Asha Rao".to_string(), ..Default::default() }.stamp();
        assert_eq!(block_on(sink.submit(&lead)), Ok(()));
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(SubmitError::Status(502).to_string(), "server responded with status 502");
        assert_eq!(SubmitError::Network("offline".into()).to_string(), "request failed: offline");
    }
}
