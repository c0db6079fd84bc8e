use anyhow::{anyhow, Context, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn from_env() -> Result<Self> {
        let api_key = dotenv::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .context("GEMINI_API_KEY required")?;
        let base_url = dotenv::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            dotenv::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            model,
            api_key,
        })
    }

    /// Non-streaming generation: one prompt string in, one completion out.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }],
            }],
        });

        let resp = self
            .client
            .post(resolve_endpoint(&self.base_url, &self.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .context("Failed to read Gemini response")?;
        if !status.is_success() {
            return Err(anyhow!("Gemini API error: HTTP {}: {}", status, text));
        }

        let json: serde_json::Value =
            serde_json::from_str(&text).context("Failed to parse Gemini JSON")?;

        extract_text(&json)
            .ok_or_else(|| anyhow!("Gemini response contained no completion text"))
    }
}

/// Resolve the generateContent endpoint from the base URL and model name.
fn resolve_endpoint(base_url: &str, model: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{}/models/{}:generateContent", base, model)
}

/// Extract content from candidates[0].content.parts[0].text (handle absence).
fn extract_text(json: &serde_json::Value) -> Option<String> {
    json["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].get(0))
        .and_then(|p| p["text"].as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_endpoint() {
        assert_eq!(
            resolve_endpoint(DEFAULT_BASE_URL, "gemini-pro"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_resolve_endpoint_trailing_slash() {
        assert_eq!(
            resolve_endpoint("http://localhost:8080/v1beta/", "gemini-pro"),
            "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_extract_text() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "The Hive is open Mondays." }],
                    "role": "model",
                },
                "finishReason": "STOP",
            }],
        });
        assert_eq!(
            extract_text(&json).as_deref(),
            Some("The Hive is open Mondays.")
        );
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let json = serde_json::json!({ "candidates": [] });
        assert!(extract_text(&json).is_none());

        let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(extract_text(&json).is_none());
    }
}
