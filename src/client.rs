//! HTTP client for the chat and session export endpoints.

use crate::{
    config::Timeout,
    error::{Error, Result},
    types::{ChatRequest, ChatResponse},
};
use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::RequestBuilder;
use tracing::debug;
use url::Url;

/// Everything except RFC 3986 unreserved characters gets escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Build the export URL for a conversation.
///
/// The identifier is percent-encoded but otherwise used exactly as returned
/// by the chat endpoint.
pub fn export_url(base_url: &str, conversation_id: &str) -> String {
    let encoded = utf8_percent_encode(conversation_id, QUERY_VALUE);
    format!(
        "{}/export/session?conversation_id={encoded}",
        base_url.trim_end_matches('/')
    )
}

/// HTTP client for the A2A UI server.
///
/// # Example
///
/// ```rust,no_run
/// use a2a_export_demo::{ChatRequest, Client, Timeout};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("http://127.0.0.1:12000")?;
/// let chat = client
///     .chat(&ChatRequest::new("hello", true), Timeout::Unbounded)
///     .await?;
/// if let Some(id) = chat.conversation_id {
///     let archive = client.export_session(&id, Timeout::Unbounded).await?;
///     println!("{} bytes", archive.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the server (e.g., "http://127.0.0.1:12000")
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = base_url.as_ref();
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Get the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a chat turn and decode the reply.
    pub async fn chat(&self, request: &ChatRequest, timeout: Timeout) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url);
        let builder = self.http.post(&url).json(request);
        let response = with_timeout(builder, timeout).send().await?;
        debug!(
            name: "chat.request.sent",
            url = %url,
            mock = request.mock.is_some(),
            status = response.status().as_u16(),
            "POST chat"
        );
        let body = Self::success_body(response).await?;
        ChatResponse::from_body(&body)
    }

    /// Download the session archive for a conversation.
    pub async fn export_session(&self, conversation_id: &str, timeout: Timeout) -> Result<Bytes> {
        let url = export_url(&self.base_url, conversation_id);
        let response = with_timeout(self.http.get(&url), timeout).send().await?;
        debug!(
            name: "export.request.sent",
            url = %url,
            status = response.status().as_u16(),
            "GET session export"
        );
        Self::success_body(response).await
    }

    async fn success_body(response: reqwest::Response) -> Result<Bytes> {
        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn with_timeout(builder: RequestBuilder, timeout: Timeout) -> RequestBuilder {
    match timeout.as_duration() {
        Some(duration) => builder.timeout(duration),
        None => builder,
    }
}
