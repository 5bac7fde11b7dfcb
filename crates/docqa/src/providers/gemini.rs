//! Gemini client for answer generation via the Generative Language REST API

use async_trait::async_trait;

use crate::config::GenerationConfig;
use crate::error::{Error, Result};
use crate::providers::llm::LlmProvider;

/// Gemini client authenticated with an API key
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    model_label: String,
    temperature: Option<f32>,
}

impl GeminiClient {
    /// Create a client from configuration
    ///
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &GenerationConfig) -> Result<Option<Self>> {
        let api_key = match config.credential() {
            Some(key) => key.to_string(),
            None => return Ok(None),
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Some(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            model_label: config.model_label.clone(),
            temperature: config.temperature,
        }))
    }

    /// Get the API endpoint URL (without the key)
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.temperature.map(|temperature| GenerationSettings { temperature }),
        }
    }

    /// Pull the first candidate's text out of a response body
    fn extract_text(body: &str) -> Result<String> {
        let parsed: GenerateResponse = serde_json::from_str(body)
            .map_err(|e| Error::Generation(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(Error::Generation(format!("Gemini API Error: {}", error.message)));
        }

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| Error::Generation("Unexpected API response format".to_string()))
    }
}

#[derive(serde::Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationSettings>,
}

#[derive(serde::Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Part {
    text: String,
}

#[derive(serde::Serialize)]
struct GenerationSettings {
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(serde::Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            // without_url keeps the API key out of logs
            .map_err(|e| Error::Generation(format!("Gemini request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Generation(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            let detail = Self::extract_text(&body)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default();
            return Err(Error::Generation(format!(
                "Gemini generation failed ({}): {}",
                status, detail
            )));
        }

        Self::extract_text(&body)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> GenerationConfig {
        GenerationConfig {
            api_key: key.map(str::to_string),
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_no_key_no_client() {
        assert!(GeminiClient::from_config(&config_with_key(None)).unwrap().is_none());
        assert!(GeminiClient::from_config(&config_with_key(Some("  "))).unwrap().is_none());
    }

    #[test]
    fn test_endpoint() {
        let mut config = config_with_key(Some("k"));
        config.base_url = "http://localhost:9999/".to_string();
        let client = GeminiClient::from_config(&config).unwrap().unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent"
        );
        assert_eq!(client.model(), "gemini-2.5-flash-preview");
    }

    #[test]
    fn test_request_shape() {
        let client = GeminiClient::from_config(&config_with_key(Some("k"))).unwrap().unwrap();
        let json = serde_json::to_value(client.build_request("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn test_extract_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"The deadline is March 5."}]}}]}"#;
        assert_eq!(
            GeminiClient::extract_text(body).unwrap(),
            "The deadline is March 5."
        );
    }

    #[test]
    fn test_extract_api_error() {
        let body = r#"{"error":{"code":400,"message":"API key not valid"}}"#;
        let err = GeminiClient::extract_text(body).unwrap_err();
        assert!(matches!(err, Error::Generation(ref m) if m.contains("API key not valid")));
    }

    #[test]
    fn test_extract_unexpected_shapes() {
        for body in ["not json", "{}", r#"{"candidates":[]}"#, r#"{"candidates":[{}]}"#] {
            assert!(matches!(
                GeminiClient::extract_text(body),
                Err(Error::Generation(_))
            ));
        }
    }
}
