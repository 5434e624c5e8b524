use super::config::AdvisorConfig;
use super::{GenerateRequest, TextGenerator};
use crate::error::AdvisorError;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use tracing::debug;

/// Text generation through the Gemini `generateContent` REST endpoint.
pub struct GeminiGenerator {
    client: Client,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

/// Builds the JSON body of a `generateContent` call.
pub(super) fn request_body(request: &GenerateRequest<'_>) -> serde_json::Value {
    serde_json::json!({
        "systemInstruction": {
            "parts": [{ "text": request.system_instruction }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.query }]
        }]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenates the text parts of the first candidate.
/// A response without candidates or text yields an empty string.
pub(super) fn extract_text(body: &str) -> Result<String, AdvisorError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| AdvisorError::MalformedResponse(e.to_string()))?;
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, AdvisorError> {
        if request.api_key.trim().is_empty() {
            return Err(AdvisorError::MissingCredentials);
        }
        let mut key = HeaderValue::from_str(request.api_key).map_err(|e| {
            AdvisorError::RequestFailed(format!("Invalid API key characters: {e}"))
        })?;
        key.set_sensitive(true);

        debug!(model = request.model, base_url = %self.base_url, "Sending advisory request");

        let response = self
            .client
            .post(self.endpoint(request.model))
            .header("x-goog-api-key", key)
            .json(&request_body(request))
            .send()
            .await
            .map_err(|e| AdvisorError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_parts_of_first_candidate() {
        let body = r#"{"candidates":[
            {"content":{"parts":[{"text":"Use a "},{"text":"Hierarchical pattern."}]}},
            {"content":{"parts":[{"text":"ignored"}]}}
        ]}"#;
        assert_eq!(extract_text(body).unwrap(), "Use a Hierarchical pattern.");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        assert_eq!(extract_text("{}").unwrap(), "");
        assert_eq!(extract_text(r#"{"candidates":[{}]}"#).unwrap(), "");
    }

    #[test]
    fn non_json_is_malformed() {
        assert!(matches!(
            extract_text("<html>"),
            Err(AdvisorError::MalformedResponse(_))
        ));
    }

    #[test]
    fn body_carries_system_instruction_and_query() {
        let request = GenerateRequest {
            api_key: "k",
            model: "m",
            system_instruction: "be brief",
            query: "which topology?",
        };
        let body = request_body(&request);
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "which topology?");
        assert_eq!(body["contents"][0]["role"], "user");
    }
}
