/// Result of a provider call that is always answered, either with the real
/// value or with a substituted fallback.
///
/// Every network-facing step in the pipeline prefers degrading to a fixed
/// fallback over surfacing an error, so callers get an explicit variant to
/// inspect instead of a swallowed exception.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The provider answered and this is its value.
    Fetched(T),
    /// The provider was skipped or failed; `value` is the fixed substitute.
    Fallback {
        value: T,
        /// Underlying error message, when there was one. `None` means the
        /// call was skipped deliberately (e.g. no credential configured).
        reason: Option<String>,
    },
}

impl<T> Outcome<T> {
    pub fn value(&self) -> &T {
        match self {
            Outcome::Fetched(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Fetched(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Fetched(_) => None,
            Outcome::Fallback { reason, .. } => reason.as_deref(),
        }
    }
}
