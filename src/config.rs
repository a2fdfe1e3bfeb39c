use std::env;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Runtime configuration, read from the environment.
///
/// Presence or absence of the provider credentials is the only switch that
/// decides between real analysis and the built-in sample data.
#[derive(Clone)]
pub struct Config {
    /// Bind address for the HTTP server.
    pub addr: String,
    /// OpenAI API key. When absent, analysis returns sample feedback.
    pub openai_api_key: Option<String>,
    /// Model used for feedback generation.
    pub openai_model: String,
    /// Gemini API key for lecture-plan generation.
    pub gemini_api_key: Option<String>,
    /// Override for the Gemini endpoint (used by tests).
    pub gemini_endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: env::var("TEACHSPARK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|s| !s.is_empty()),
            openai_model: env::var("TEACHSPARK_OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
            gemini_endpoint: env::var("TEACHSPARK_GEMINI_URL")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}
