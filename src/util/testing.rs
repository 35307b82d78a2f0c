// src/util/testing.rs

use anyhow::Result;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::AnkiConnect;
use crate::domain::DomainError;

enum MockResponse {
    Result(Value),
    TransportError(String),
    ApiError(String),
}

/// Scripted stand-in for the AnkiConnect API
///
/// Responses are queued per action and handed out in order. An action
/// without a queued response answers with `null`. Every call is recorded
/// with the params that were sent.
///
/// # Examples
///
/// ```
/// use ankiwords::application::AnkiConnect;
/// use ankiwords::util::testing::MockAnkiConnect;
/// use serde_json::json;
///
/// let mut mock = MockAnkiConnect::builder()
///     .with_result("findNotes", json!([1, 2]))
///     .build();
///
/// assert_eq!(mock.call("findNotes", None).unwrap(), json!([1, 2]));
/// assert_eq!(mock.calls()[0].1, json!({}));
/// ```
pub struct MockAnkiConnect {
    responses: HashMap<String, VecDeque<MockResponse>>,
    calls: Vec<(String, Value)>,
}

impl MockAnkiConnect {
    pub fn builder() -> MockAnkiConnectBuilder {
        MockAnkiConnectBuilder::new()
    }

    /// Actions invoked so far with their params
    pub fn calls(&self) -> &[(String, Value)] {
        &self.calls
    }
}

impl AnkiConnect for MockAnkiConnect {
    fn call(&mut self, action: &str, params: Option<Value>) -> Result<Value, DomainError> {
        self.calls
            .push((action.to_string(), params.unwrap_or_else(|| json!({}))));

        match self
            .responses
            .get_mut(action)
            .and_then(|queue| queue.pop_front())
        {
            Some(MockResponse::Result(value)) => Ok(value),
            Some(MockResponse::TransportError(message)) => Err(DomainError::Transport(message)),
            Some(MockResponse::ApiError(message)) => Err(DomainError::Api {
                action: action.to_string(),
                message,
            }),
            None => Ok(Value::Null),
        }
    }
}

/// Builder for MockAnkiConnect
pub struct MockAnkiConnectBuilder {
    responses: HashMap<String, VecDeque<MockResponse>>,
}

impl MockAnkiConnectBuilder {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    fn push(mut self, action: &str, response: MockResponse) -> Self {
        self.responses
            .entry(action.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Queue a successful `result` for the next call of `action`
    pub fn with_result(self, action: &str, result: Value) -> Self {
        self.push(action, MockResponse::Result(result))
    }

    /// Queue a transport failure for the next call of `action`
    pub fn with_transport_error(self, action: &str, message: &str) -> Self {
        self.push(action, MockResponse::TransportError(message.to_string()))
    }

    /// Queue an error envelope for the next call of `action`
    pub fn with_api_error(self, action: &str, message: &str) -> Self {
        self.push(action, MockResponse::ApiError(message.to_string()))
    }

    pub fn build(self) -> MockAnkiConnect {
        MockAnkiConnect {
            responses: self.responses,
            calls: Vec::new(),
        }
    }
}

impl Default for MockAnkiConnectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "hyper_util", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
