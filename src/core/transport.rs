//! HTTP transport abstraction

use async_trait::async_trait;
use url::Url;

use crate::core::errors::Result;

/// Outbound POST request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// First header value with the given name, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body bytes
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends a single request and returns the raw response
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Transport backed by a default `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.post(request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = HttpRequest {
            url: Url::parse("https://example.com/translate").unwrap(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Vec::new(),
        };
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Ocp-Apim-Subscription-Key"), None);
    }

    #[test]
    fn test_reqwest_transport_refuses_closed_port() {
        let transport = ReqwestTransport::new();
        let request = HttpRequest {
            url: Url::parse("http://127.0.0.1:9/detect").unwrap(),
            headers: Vec::new(),
            body: b"[]".to_vec(),
        };
        let result = tokio_test::block_on(transport.send(request));
        assert!(matches!(
            result,
            Err(crate::core::errors::TranslatorError::HttpError(_))
        ));
    }
}
