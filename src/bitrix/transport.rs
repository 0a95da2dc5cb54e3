use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Url;

use crate::bitrix::StageError;

/// Raw reply from a webhook method call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub status: u16,
    pub body: String,
}

impl WebhookReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can deliver a form-encoded webhook call.
///
/// The HTTP status is handed back untouched; callers decide what it means.
pub trait WebhookTransport {
    fn post_form(&self, method: &str, fields: &[(&str, String)]) -> Result<WebhookReply, StageError>;
}

impl<T: WebhookTransport + ?Sized> WebhookTransport for &T {
    fn post_form(&self, method: &str, fields: &[(&str, String)]) -> Result<WebhookReply, StageError> {
        (**self).post_form(method, fields)
    }
}

/// Blocking reqwest transport bound to one webhook base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StageError> {
        let base_url = parse_webhook_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("stagehand/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Full URL of a webhook method (`<base>/<method>`)
    pub fn method_url(&self, method: &str) -> Result<Url, StageError> {
        self.base_url.join(method).map_err(|e| StageError::InvalidWebhook {
            url: format!("{}{}", self.base_url, method),
            reason: e.to_string(),
        })
    }
}

impl WebhookTransport for HttpTransport {
    fn post_form(&self, method: &str, fields: &[(&str, String)]) -> Result<WebhookReply, StageError> {
        let url = self.method_url(method)?;
        // The URL carries the access token, so only the method name is logged
        debug!("POST {} ({} fields)", method, fields.len());

        let response = self.client.post(url).form(fields).send().map_err(redact)?;
        let status = response.status().as_u16();
        let reply = WebhookReply { status, body: response.text().map_err(redact)? };

        if reply.is_success() {
            debug!("{} answered with HTTP {}", method, status);
        } else {
            warn!("{} answered with HTTP {}", method, status);
        }

        Ok(reply)
    }
}

/// Drop the URL (and the token in it) from a request error
fn redact(err: reqwest::Error) -> StageError {
    StageError::Transport(err.without_url())
}

/// Parse a webhook base URL, normalising it to end with `/` so method names join under it
pub fn parse_webhook_url(raw: &str) -> Result<Url, StageError> {
    let invalid = |reason: String| StageError::InvalidWebhook {
        url: raw.to_string(),
        reason,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid("webhook URL is empty".to_string()));
    }

    let mut url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
