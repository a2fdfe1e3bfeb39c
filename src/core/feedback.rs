use crate::core::mock::mock_feedback_report;
use crate::core::outcome::Outcome;
use crate::core::parser::{FeedbackReport, parse_feedback};
use crate::core::profile::TeacherProfile;
use crate::error::Result;
use async_openai::{
    config::OpenAIConfig,
    types::responses::{
        CreateResponseArgs, EasyInputMessageArgs, InputItem, InputParam, OutputItem,
        OutputMessageContent, Role,
    },
};
use tracing::{debug, error, warn};

const SYSTEM_PROMPT: &str =
    "You are an expert teaching coach providing detailed, actionable feedback.";
const MAX_OUTPUT_TOKENS: u32 = 3000;

#[derive(Clone)]
pub struct FeedbackService {
    /// `None` when no credential is configured; analysis then skips the
    /// network entirely and returns the sample report.
    client: Option<async_openai::Client<OpenAIConfig>>,
    model: String,
}

impl FeedbackService {
    pub fn new(api_key: Option<&str>, model: &str) -> Self {
        let client = api_key
            .map(|key| async_openai::Client::with_config(OpenAIConfig::new().with_api_key(key)));
        Self {
            client,
            model: model.to_string(),
        }
    }

    /// Analyze a teaching transcript against the teacher's profile.
    ///
    /// Never fails: with no credential the sample report is returned without
    /// a network call, and any provider error degrades to the same sample
    /// report with the error message attached for diagnostics.
    pub async fn analyze(
        &self,
        profile: &TeacherProfile,
        transcript: &str,
    ) -> Outcome<FeedbackReport> {
        let Some(client) = &self.client else {
            warn!("no OpenAI credential configured, returning sample feedback");
            return Outcome::Fallback {
                value: mock_feedback_report(),
                reason: None,
            };
        };

        match self.request_completion(client, profile, transcript).await {
            Ok(completion) => Outcome::Fetched(parse_feedback(&completion)),
            Err(e) => {
                error!(error = %e, "feedback generation failed, substituting sample report");
                Outcome::Fallback {
                    value: mock_feedback_report(),
                    reason: Some(e.to_string()),
                }
            }
        }
    }

    async fn request_completion(
        &self,
        client: &async_openai::Client<OpenAIConfig>,
        profile: &TeacherProfile,
        transcript: &str,
    ) -> Result<String> {
        let request = CreateResponseArgs::default()
            .max_output_tokens(MAX_OUTPUT_TOKENS)
            .model(&self.model)
            .input(InputParam::Items(vec![
                InputItem::EasyMessage(
                    EasyInputMessageArgs::default()
                        .role(Role::System)
                        .content(SYSTEM_PROMPT)
                        .build()?,
                ),
                InputItem::EasyMessage(
                    EasyInputMessageArgs::default()
                        .role(Role::User)
                        .content(build_prompt(profile, transcript)?)
                        .build()?,
                ),
            ]))
            .build()?;

        let response = client.responses().create(request).await?;

        let mut completion = String::new();
        for output in response.output {
            if let OutputItem::Message(message) = output {
                for part in message.content {
                    match part {
                        OutputMessageContent::OutputText(text) => completion.push_str(&text.text),
                        other => debug!(?other, "skipping non-text output content"),
                    }
                }
            }
        }

        Ok(completion)
    }
}

/// Render the fixed coaching prompt with the profile and transcript
/// interpolated verbatim.
pub fn build_prompt(profile: &TeacherProfile, transcript: &str) -> Result<String> {
    let profile_json = serde_json::to_string_pretty(profile)?;

    Ok(format!(
        "You are an expert teaching coach with years of experience observing and providing feedback to teachers.

Analyze the following teaching transcript and provide detailed, actionable feedback.

TEACHER PROFILE:
{profile_json}

TRANSCRIPT:
{transcript}

Please provide feedback in the following format:

OVERALL FEEDBACK:
[A 2-3 sentence summary of the teaching observed, highlighting major strengths and 1-2 key areas for growth]

STRENGTHS:
- [Strength 1]
- [Strength 2]
- [Strength 3]
- [Strength 4]
- [Strength 5]
- [Strength 6]

AREAS FOR IMPROVEMENT:
- [Area 1]
- [Area 2]
- [Area 3]
- [Area 4]
- [Area 5]
- [Area 6]
- [Area 7]
- [Area 8]
- [Area 9]

AVOID/RETHINK:
- [Issue 1]
- [Issue 2]
- [Issue 3]
- [Issue 4]
- [Issue 5]

DETAILED FEEDBACK:

DOMAIN 1: PLANNING AND PREPARATION
[Provide 7 specific observations about planning and preparation, using the following format for each:]
- ✅ [Strength]: [Evidence from transcript] → [Impact]
- ⏳ [Area for improvement]: [Evidence from transcript] → [Specific suggestion] → [Expected impact]
- ⛔ [Critical issue to avoid]: [Evidence from transcript] → [Why this should be reconsidered]

DOMAIN 2: CLASSROOM ENVIRONMENT
[Follow same format as Domain 1]

DOMAIN 3: INSTRUCTION
[Follow same format as Domain 1]

For each observation, provide:
1. Direct evidence from the transcript (quote or specific reference)
2. Specific changes that could be implemented immediately
3. The intended impact of these changes

Please ensure your feedback is specific, actionable, and directly tied to evidence from the transcript."
    ))
}
