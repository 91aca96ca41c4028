//! Microsoft Translator - minimal async client library
//!
//! This library wraps the translate and detect endpoints of the Microsoft
//! Translator v3 HTTP API.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::{ClientConfig, DebugSink, DEFAULT_BASE_URL},
    errors::{Result, TranslatorError},
    models::{DetectResult, DetectedLanguage, ServiceError, TranslateResult},
    transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
