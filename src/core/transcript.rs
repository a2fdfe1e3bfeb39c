use crate::core::mock::FALLBACK_TRANSCRIPT;
use crate::core::outcome::Outcome;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Languages tried for captions, in order of preference.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "es"];

/// One caption fragment, kept alongside the joined transcript for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    pub text: String,
    /// Offset from the start of the video, seconds.
    pub start: f64,
    pub duration: f64,
}

/// Full transcript for a video: ordered caption fragments joined into one
/// string, with timing metadata on the side.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptResult {
    pub transcript: String,
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptResult {
    fn fallback() -> Self {
        Self {
            transcript: FALLBACK_TRANSCRIPT.to_string(),
            segments: Vec::new(),
        }
    }
}

/// Source of raw caption fragments for a video.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch(&self, video_id: &str, languages: &[&str]) -> Result<Vec<TranscriptSegment>>;
}

struct YouTubeProvider {
    api: YouTubeTranscriptApi,
}

#[async_trait]
impl TranscriptProvider for YouTubeProvider {
    async fn fetch(&self, video_id: &str, languages: &[&str]) -> Result<Vec<TranscriptSegment>> {
        let fetched = self
            .api
            .fetch_transcript(video_id, languages, false)
            .await
            .map_err(|e| Error::custom(e.to_string()))?;

        Ok(fetched
            .snippets
            .iter()
            .map(|snippet| TranscriptSegment {
                text: snippet.text.trim().to_string(),
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}

#[derive(Clone)]
pub struct TranscriptService {
    provider: Arc<dyn TranscriptProvider>,
}

impl TranscriptService {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| Error::custom(format!("Failed to initialize transcript client: {e}")))?;
        Ok(Self::with_provider(Arc::new(YouTubeProvider { api })))
    }

    /// Build a service over an alternative caption source.
    pub fn with_provider(provider: Arc<dyn TranscriptProvider>) -> Self {
        Self { provider }
    }

    /// Fetch captions for a video. Any provider failure (network error, no
    /// captions, unknown video) substitutes the fixed fallback transcript so
    /// the downstream feedback step always has something to analyze.
    pub async fn fetch(&self, video_id: &str, languages: &[&str]) -> Outcome<TranscriptResult> {
        match self.provider.fetch(video_id, languages).await {
            Ok(segments) => Outcome::Fetched(TranscriptResult {
                transcript: join_fragments(segments.iter().map(|s| s.text.as_str())),
                segments,
            }),
            Err(e) => {
                warn!(video_id, error = %e, "transcript fetch failed, substituting fallback");
                Outcome::Fallback {
                    value: TranscriptResult::fallback(),
                    reason: Some(format!("Failed to fetch transcript: {e}")),
                }
            }
        }
    }
}

/// Join ordered caption fragments with single spaces, dropping empty ones.
fn join_fragments<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_join_with_single_spaces() {
        let joined = join_fragments(["Good morning", "class!", "Today"].into_iter());
        assert_eq!(joined, "Good morning class! Today");
    }

    #[test]
    fn empty_fragments_are_dropped() {
        let joined = join_fragments(["one", "", "two"].into_iter());
        assert_eq!(joined, "one two");
    }

    #[test]
    fn fallback_result_has_the_fixed_transcript_and_no_segments() {
        let result = TranscriptResult::fallback();
        assert!(result.transcript.contains("numerator"));
        assert!(result.segments.is_empty());
    }

    struct FixedCaptions(Vec<TranscriptSegment>);

    #[async_trait]
    impl TranscriptProvider for FixedCaptions {
        async fn fetch(&self, _: &str, _: &[&str]) -> Result<Vec<TranscriptSegment>> {
            Ok(self.0.clone())
        }
    }

    struct UnavailableCaptions;

    #[async_trait]
    impl TranscriptProvider for UnavailableCaptions {
        async fn fetch(&self, _: &str, _: &[&str]) -> Result<Vec<TranscriptSegment>> {
            Err(Error::custom("no captions available"))
        }
    }

    fn segment(text: &str, start: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start,
            duration: 2.0,
        }
    }

    #[tokio::test]
    async fn fetched_captions_are_joined_and_kept_as_segments() {
        let service = TranscriptService::with_provider(Arc::new(FixedCaptions(vec![
            segment("Good morning class!", 0.0),
            segment("Today we learn fractions.", 2.0),
        ])));

        let outcome = service.fetch("dQw4w9WgXcQ", DEFAULT_LANGUAGES).await;
        assert!(!outcome.is_fallback());

        let result = outcome.into_value();
        assert_eq!(result.transcript, "Good morning class! Today we learn fractions.");
        assert_eq!(result.segments.len(), 2);
    }

    #[tokio::test]
    async fn provider_failure_substitutes_the_fallback_transcript() {
        let service = TranscriptService::with_provider(Arc::new(UnavailableCaptions));

        let outcome = service.fetch("dQw4w9WgXcQ", DEFAULT_LANGUAGES).await;
        assert!(outcome.is_fallback());
        assert_eq!(
            outcome.reason(),
            Some("Failed to fetch transcript: no captions available")
        );
        assert!(outcome.value().transcript.contains("numerator"));
    }
}
