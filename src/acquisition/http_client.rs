//! HTTP client wrapping reqwest.
//!
//! Not a browser — one form POST per run. Follows redirects, enforces an
//! explicit timeout, and hands the numeric status code back to the caller
//! instead of deciding success itself.

use anyhow::Result;
use std::time::Duration;

/// Response from an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// HTTP client for the status tracker.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with an explicit timeout.
    pub fn new(timeout_ms: u64) -> Self {
        let ua = concat!("passtrack/", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// POST form data (url-encoded) and return the body text with its
    /// status code.
    ///
    /// The tracker is queried exactly once per run; there are no retries.
    pub async fn post_form(
        &self,
        url: &str,
        form_fields: &[(String, String)],
        timeout_ms: u64,
    ) -> Result<HttpResponse> {
        let r = self
            .client
            .post(url)
            .timeout(Duration::from_millis(timeout_ms))
            .form(form_fields)
            .send()
            .await?;

        let status = r.status().as_u16();
        let final_url = r.url().to_string();
        let body = r.text().await.unwrap_or_default();

        Ok(HttpResponse {
            url: url.to_string(),
            final_url,
            status,
            body,
        })
    }
}
