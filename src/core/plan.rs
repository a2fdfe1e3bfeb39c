use crate::error::{Error, Result};
use serde_json::{Value, json};
use tracing::warn;

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Passthrough to the generative-content provider for lecture plans: the
/// prompt goes out verbatim and the provider's JSON comes back untouched.
#[derive(Clone)]
pub struct PlanService {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

/// Raw provider reply: its HTTP status plus its body.
#[derive(Debug, Clone)]
pub struct PlanResponse {
    pub status: u16,
    pub body: Value,
}

impl PlanService {
    pub fn new(api_key: Option<String>, endpoint: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<PlanResponse> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::custom("Missing GEMINI_API_KEY on the server"))?;

        let response = self
            .http
            .post(format!("{}?key={key}", self.endpoint))
            .json(&json!({ "contents": [{ "parts": [{ "text": prompt }] }] }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            warn!(status, "lecture-plan provider returned an error");
            return Ok(PlanResponse {
                status,
                body: json!({ "error": text }),
            });
        }

        Ok(PlanResponse {
            status,
            body: serde_json::from_str(&text)?,
        })
    }
}
