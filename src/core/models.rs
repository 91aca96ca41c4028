//! Wire and result models for the translator service

use serde::{Deserialize, Serialize};
use std::fmt;

/// One item of a request body. The service takes an array of these.
#[derive(Debug, Clone, Serialize)]
pub struct TextItem<'a> {
    #[serde(rename = "Text")]
    pub text: &'a str,
}

/// Language the service detected for the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub score: f32,
}

/// Single translation inside a translate response element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    #[serde(default)]
    pub to: String,
}

/// Element of the `/translate` success array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    #[serde(default)]
    pub detected_language: Option<DetectedLanguage>,
    pub translations: Vec<Translation>,
}

/// Alternative language candidate of a detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub language: String,
    pub score: f32,
    #[serde(default)]
    pub is_translation_supported: bool,
    #[serde(default)]
    pub is_transliteration_supported: bool,
}

/// Element of the `/detect` success array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub language: String,
    pub score: f32,
    #[serde(default)]
    pub is_translation_supported: bool,
    #[serde(default)]
    pub is_transliteration_supported: bool,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

/// Error object carried by the service's error envelope.
///
/// Missing fields decode to zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// `{"error": {...}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: ServiceError,
}

impl ErrorEnvelope {
    /// Decode an envelope from a body that must be a JSON object
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
        serde_json::from_value(serde_json::Value::Object(object))
    }
}

/// Translate result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResult {
    pub translated_text: String,
    pub to: String,
    pub detected_language: Option<DetectedLanguage>,
}

/// Detect result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectResult {
    pub confidence_score: f32,
    pub language_code: String,
}

impl DetectResult {
    /// Sentinel returned in place of a detection on failure: `(-1, "")`
    pub fn undetermined() -> Self {
        Self {
            confidence_score: -1.0,
            language_code: String::new(),
        }
    }
}

impl fmt::Display for DetectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.language_code, self.confidence_score)
    }
}

impl From<DetectResponse> for DetectResult {
    fn from(resp: DetectResponse) -> Self {
        Self {
            confidence_score: resp.score,
            language_code: resp.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_text_item_uses_capitalized_key() {
        let body = serde_json::to_value([TextItem { text: "Hello" }]).unwrap();
        assert_json_eq!(body, json!([{ "Text": "Hello" }]));
    }

    #[test]
    fn test_detect_response_decodes_alternatives() {
        let raw = r#"[{
            "language": "de",
            "score": 0.92,
            "isTranslationSupported": true,
            "isTransliterationSupported": false,
            "alternatives": [
                {"language": "nl", "score": 0.4, "isTranslationSupported": true, "isTransliterationSupported": false}
            ]
        }]"#;
        let parsed: Vec<DetectResponse> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].language, "de");
        assert!(parsed[0].is_translation_supported);
        assert_eq!(parsed[0].alternatives[0].language, "nl");
    }

    #[test]
    fn test_translate_response_without_detected_language() {
        let raw = r#"[{"translations":[{"text":"Hallo","to":"de"}]}]"#;
        let parsed: Vec<TranslateResponse> = serde_json::from_str(raw).unwrap();
        assert!(parsed[0].detected_language.is_none());
        assert_eq!(parsed[0].translations[0].text, "Hallo");
    }

    #[test]
    fn test_partial_envelope_defaults_missing_fields() {
        let env = ErrorEnvelope::from_slice(br#"{"error":{"code":400}}"#).unwrap();
        assert_eq!(env.error, ServiceError { code: 400, message: String::new() });

        let env = ErrorEnvelope::from_slice(br#"{"error":{"message":"bad"}}"#).unwrap();
        assert_eq!(env.error.code, 0);
        assert_eq!(env.error.message, "bad");

        let env = ErrorEnvelope::from_slice(b"{}").unwrap();
        assert_eq!(env.error, ServiceError::default());
    }

    #[test]
    fn test_envelope_requires_json_object() {
        assert!(ErrorEnvelope::from_slice(b"[]").is_err());
        assert!(ErrorEnvelope::from_slice(br#"[{"code":1}]"#).is_err());
        assert!(ErrorEnvelope::from_slice(b"<html></html>").is_err());
        assert!(ErrorEnvelope::from_slice(br#"{"error":"oops"}"#).is_err());
    }

    #[test]
    fn test_undetermined_sentinel() {
        let result = DetectResult::undetermined();
        assert_eq!(result.confidence_score, -1.0);
        assert_eq!(result.language_code, "");
    }
}
