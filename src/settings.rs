use std::{env, time::Duration};

use crate::{consts::{API_HOST, POLL_INTERVAL}, error::{ConvertioError, Result}};

pub struct ClientSettings {
    pub api_key: String,
    pub api_host: String,
    pub poll_interval: Duration,
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientSettings {
            api_key: api_key.into(),
            api_host: API_HOST.to_string(),
            poll_interval: POLL_INTERVAL,
            request_timeout: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(ClientSettings {
            api_key: get_api_key()?,
            api_host: get_api_host(),
            poll_interval: get_poll_interval(),
            request_timeout: get_request_timeout(),
        })
    }

    pub fn with_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn get_api_key() -> Result<String> {
    match env::var("CONVERTIO_API_KEY") {
        Ok(api_key) if !api_key.trim().is_empty() => Ok(api_key.trim().to_string()),
        _ => Err(ConvertioError::MissingApiKey),
    }
}

fn get_api_host() -> String {
    env::var("CONVERTIO_API_HOST").unwrap_or_else(|_| API_HOST.to_string())
}

fn get_poll_interval() -> Duration {
    let poll_interval = env::var("CONVERTIO_POLL_INTERVAL_MS").map(|millis| millis.parse::<u64>());
    match poll_interval {
        Ok(Ok(millis)) => Duration::from_millis(millis),
        _ => POLL_INTERVAL,
    }
}

fn get_request_timeout() -> Option<Duration> {
    let request_timeout = env::var("CONVERTIO_REQUEST_TIMEOUT_SECONDS").map(|seconds| seconds.parse::<u64>());
    match request_timeout {
        Ok(Ok(seconds)) if seconds > 0 => Some(Duration::from_secs(seconds)),
        _ => None,
    }
}
