// src/infrastructure/anki_connect.rs
use crate::application::AnkiConnect;
use crate::domain::DomainError;
use crate::infrastructure::AnkiConnectConfig;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

#[derive(Debug, Serialize)]
struct Request<'a> {
    action: &'a str,
    version: u8,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<Value>,
}

/// Blocking HTTP client for a running AnkiConnect add-on
#[derive(Debug)]
pub struct AnkiConnectClient {
    http: Client,
    url: String,
    version: u8,
}

impl AnkiConnectClient {
    pub fn new(url: impl Into<String>, version: u8) -> Result<Self, DomainError> {
        // AnkiConnect only listens locally
        let http = Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {e}")))?;
        let url = url.into();

        debug!(%url, version, "Created AnkiConnect client");
        Ok(Self { http, url, version })
    }

    pub fn from_config(config: &AnkiConnectConfig) -> Result<Self, DomainError> {
        Self::new(config.url.clone(), config.version)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AnkiConnect for AnkiConnectClient {
    #[instrument(level = "debug", skip(self, params), fields(url = %self.url))]
    fn call(&mut self, action: &str, params: Option<Value>) -> Result<Value, DomainError> {
        let request = Request {
            action,
            version: self.version,
            params: params.unwrap_or_else(|| json!({})),
        };

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!(error = %e, "AnkiConnect request failed");
                DomainError::Transport(e.to_string())
            })?;

        let envelope: Envelope = response
            .json()
            .map_err(|e| DomainError::InvalidResponse(format!("{action}: {e}")))?;

        match envelope.error {
            None | Some(Value::Null) => Ok(envelope.result),
            Some(error) => {
                let message = match error {
                    Value::String(message) => message,
                    other => other.to_string(),
                };
                warn!(%message, "AnkiConnect returned an error");
                Err(DomainError::Api {
                    action: action.to_string(),
                    message,
                })
            }
        }
    }
}
