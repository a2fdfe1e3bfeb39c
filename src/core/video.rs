use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// YouTube video identifiers are always exactly this long.
pub const VIDEO_ID_LEN: usize = 11;

// One pattern covering the common URL shapes: watch?v=, &v=, youtu.be/,
// embed/, /v/ and /u/<char>/.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|embed/|[?&]v=)([A-Za-z0-9_-]+)")
        .expect("video id pattern compiles")
});

/// Extract an 11-character video identifier from an arbitrary YouTube URL.
///
/// Returns `None` when no marker is present or the captured token is not
/// exactly 11 characters; a partial identifier is never returned.
pub fn extract_video_id(url: &str) -> Option<String> {
    let captures = VIDEO_ID_RE.captures(url)?;
    let token = captures.get(1)?.as_str();
    (token.len() == VIDEO_ID_LEN).then(|| token.to_string())
}

/// A submitted video plus the session's selection around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReference {
    pub video_id: String,
    pub url: String,
    /// Selected range in minutes, `[start, end]`.
    pub time_range: [f64; 2],
    pub transcript: String,
}
