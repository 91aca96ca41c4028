//! Translator client: request construction and response decoding

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;
use url::Url;

use crate::core::config::ClientConfig;
use crate::core::debug_log::DebugLog;
use crate::core::errors::{Result, TranslatorError};
use crate::core::models::{
    DetectResponse, DetectResult, ErrorEnvelope, ServiceError, TextItem, TranslateResponse,
    TranslateResult,
};
use crate::core::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

const API_VERSION: &str = "3.0";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// Outcome of decoding a response body
#[derive(Debug)]
enum Answer<T> {
    Success(Vec<T>),
    Service(ServiceError),
    Unknown,
}

impl<T: DeserializeOwned> Answer<T> {
    /// Try the success array (only on 200), then the error envelope, then give up.
    fn decode(response: &HttpResponse) -> Self {
        if response.status == 200 {
            if let Ok(items) = serde_json::from_slice::<Vec<T>>(&response.body) {
                return Answer::Success(items);
            }
        }
        match ErrorEnvelope::from_slice(&response.body) {
            Ok(envelope) => Answer::Service(envelope.error),
            Err(_) => Answer::Unknown,
        }
    }

    /// Collapse into the single expected element
    fn into_single(self) -> Result<T> {
        match self {
            Answer::Success(mut items) => {
                if items.len() != 1 {
                    return Err(TranslatorError::ResponseShape { count: items.len() });
                }
                Ok(items.remove(0))
            }
            Answer::Service(err) => {
                warn!("Translator service error {}: {}", err.code, err.message);
                Err(TranslatorError::Service {
                    code: err.code,
                    message: err.message,
                })
            }
            Answer::Unknown => Err(TranslatorError::UnknownAnswer),
        }
    }
}

/// Client for the translate and detect endpoints
#[derive(Clone)]
pub struct TranslationClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    log: DebugLog,
}

impl std::fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationClient")
            .field("config", &self.config)
            .field("log", &self.log)
            .finish()
    }
}

impl TranslationClient {
    /// Create a client using the default reqwest transport
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client over an explicit transport
    pub fn with_transport(mut config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        config.base_url = config.resolved_base_url().to_string();
        let log = DebugLog::new(config.debug.clone());

        Self {
            config: Arc::new(config),
            transport,
            log,
        }
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Translate `text` into `target_lang`.
    ///
    /// An empty `source_lang` lets the service detect the source language.
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        Ok(self
            .translate_detailed(text, source_lang, target_lang)
            .await?
            .translated_text)
    }

    /// Translate and keep the target language and any detected source language
    pub async fn translate_detailed(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslateResult> {
        if target_lang.is_empty() {
            return Err(TranslatorError::ConfigError {
                message: "target language is required".to_string(),
            });
        }

        let mut query = vec![("api-version", API_VERSION)];
        if !source_lang.is_empty() {
            self.log.log("add \"from\" to param");
            query.push(("from", source_lang));
        }
        query.push(("to", target_lang));

        let response = self.post("translate", &query, text).await?;
        let mut item = Answer::<TranslateResponse>::decode(&response).into_single()?;
        if item.translations.is_empty() {
            return Err(TranslatorError::EmptyTranslations);
        }
        let translation = item.translations.swap_remove(0);
        self.log.log(format!("Translated to {:?}", translation.to));

        Ok(TranslateResult {
            translated_text: translation.text,
            to: translation.to,
            detected_language: item.detected_language,
        })
    }

    /// Detect the language of `text`
    pub async fn detect(&self, text: &str) -> Result<DetectResult> {
        let response = self.post("detect", &[("api-version", API_VERSION)], text).await?;
        let item = Answer::<DetectResponse>::decode(&response).into_single()?;
        self.log.log(format!("Detected {} ({})", item.language, item.score));

        Ok(item.into())
    }

    /// Detect, returning the `(-1, "")` sentinel alongside the error on failure
    pub async fn detect_or_undetermined(&self, text: &str) -> (DetectResult, Option<TranslatorError>) {
        match self.detect(text).await {
            Ok(result) => (result, None),
            Err(e) => (DetectResult::undetermined(), Some(e)),
        }
    }

    /// Build the endpoint URL: base path joined with `endpoint`, query keys appended
    fn endpoint_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            self.log.log("Error parse url");
            e
        })?;

        let path = format!("{}/{}", url.path().trim_end_matches('/'), endpoint);
        url.set_path(&path);

        let mut sorted = query.to_vec();
        sorted.sort_by_key(|(k, _)| *k);
        url.query_pairs_mut().extend_pairs(sorted);

        Ok(url)
    }

    async fn post(&self, endpoint: &str, query: &[(&str, &str)], text: &str) -> Result<HttpResponse> {
        let url = self.endpoint_url(endpoint, query)?;
        let body = serde_json::to_vec(&[TextItem { text }])?;
        self.log.log(url.as_str());

        let request = HttpRequest {
            url,
            headers: vec![
                (KEY_HEADER.to_string(), self.config.subscription_key.clone()),
                (REGION_HEADER.to_string(), self.config.region.clone()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            self.log.log("Post error");
            e
        })?;
        self.log.log(format!("Response code: {}", response.status));

        Ok(response)
    }
}
