// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the server's asset edit endpoints.
//!
//! - `PUT  {server}/api/assets/{id}/edits` with `{"edits": [...]}` replaces the stored edits
//! - `DELETE {server}/api/assets/{id}/edits` removes them
//!
//! Both answer as soon as the request is accepted; the server applies the
//! edits in the background and announces completion as a pushed event.

use crate::application::port::{EditTransport, TransportError};
use crate::config::{defaults::USER_AGENT, Config};
use crate::domain::editing::{AssetId, EditAction};
use crate::error::{Error, Result};
use futures_util::future::{BoxFuture, FutureExt};
use serde::Serialize;

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
struct AssetEditActionList<'a> {
    edits: &'a [EditAction],
}

/// [`EditTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Creates a client from the `server_url` and `api_key` settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config
            .server_url
            .clone()
            .ok_or_else(|| Error::Config("server_url is not set".to_string()))?;
        Self::new(base_url, config.api_key.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn edits_url(&self, asset_id: &AssetId) -> String {
        format!("{}/api/assets/{}/edits", self.base_url, asset_id)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<(), TransportError> {
        let request = match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            };
            return Err(TransportError::Status {
                code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

impl EditTransport for ApiClient {
    fn apply_edits<'a>(
        &'a self,
        asset_id: &'a AssetId,
        edits: &'a [EditAction],
    ) -> BoxFuture<'a, std::result::Result<(), TransportError>> {
        let request = self
            .client
            .put(self.edits_url(asset_id))
            .json(&AssetEditActionList { edits });
        self.send(request).boxed()
    }

    fn remove_edits<'a>(
        &'a self,
        asset_id: &'a AssetId,
    ) -> BoxFuture<'a, std::result::Result<(), TransportError>> {
        let request = self.client.delete(self.edits_url(asset_id));
        self.send(request).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editing::{MirrorAxis, MirrorParameters};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one request with `status_line`, reporting the raw request back.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let content_length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&raw).to_string());
        });

        (format!("http://{addr}"), rx)
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ApiClient::new("http://photos.local:2283/", None).unwrap();
        assert_eq!(client.base_url(), "http://photos.local:2283");
        assert_eq!(
            client.edits_url(&AssetId::new("A1")),
            "http://photos.local:2283/api/assets/A1/edits"
        );
    }

    #[test]
    fn from_config_requires_server_url() {
        let result = ApiClient::from_config(&Config::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn apply_edits_puts_edit_list_with_api_key() {
        let (url, request) = serve_once("200 OK", "{}").await;
        let client = ApiClient::new(url, Some("secret".into())).unwrap();
        let edits = [EditAction::Mirror(MirrorParameters {
            axis: MirrorAxis::Horizontal,
        })];

        client
            .apply_edits(&AssetId::new("A1"), &edits)
            .await
            .expect("accepted");

        let raw = request.await.unwrap();
        assert!(raw.starts_with("PUT /api/assets/A1/edits HTTP/1.1"));
        assert!(raw.to_ascii_lowercase().contains("x-api-key: secret"));
        assert!(raw.contains(r#"{"edits":[{"action":"mirror","parameters":{"axis":"horizontal"}}]}"#));
    }

    #[tokio::test]
    async fn remove_edits_sends_delete() {
        let (url, request) = serve_once("204 No Content", "").await;
        let client = ApiClient::new(url, None).unwrap();

        client.remove_edits(&AssetId::new("A1")).await.expect("accepted");

        let raw = request.await.unwrap();
        assert!(raw.starts_with("DELETE /api/assets/A1/edits HTTP/1.1"));
        assert!(!raw.to_ascii_lowercase().contains("x-api-key"));
    }

    #[tokio::test]
    async fn error_status_is_reported_with_body() {
        let (url, _request) = serve_once("400 Bad Request", "invalid crop").await;
        let client = ApiClient::new(url, None).unwrap();

        let result = client.remove_edits(&AssetId::new("A1")).await;
        assert_eq!(
            result,
            Err(TransportError::Status {
                code: 400,
                message: "invalid crop".into()
            })
        );
    }
}
