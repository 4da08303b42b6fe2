//! Like/dislike actions and the per-origin cooldown that throttles them.

use chrono::Duration;

use crate::types::Timestamp;

/// Minimum time between two like/dislike actions from the same origin on
/// the same project.
pub const LIKE_COOLDOWN_SECS: i64 = 10;

/// Origin recorded when the caller's address cannot be determined.
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// A vote cast on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Dislike,
}

impl LikeAction {
    /// Parse the wire value. Anything other than `like`/`dislike` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Signed change applied to `likes_count` before flooring at zero.
    pub fn delta(self) -> i64 {
        match self {
            Self::Like => 1,
            Self::Dislike => -1,
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Dislike => "disliked",
        }
    }
}

/// Time left before `last_action_at` stops blocking a new action, or `None`
/// once the window has elapsed.
pub fn cooldown_remaining(
    last_action_at: Timestamp,
    now: Timestamp,
    cooldown: Duration,
) -> Option<Duration> {
    let elapsed = now - last_action_at;
    if elapsed < cooldown {
        Some(cooldown - elapsed)
    } else {
        None
    }
}

/// Round a remaining cooldown up to whole seconds, minimum 1, for the
/// `Retry-After` header.
pub fn retry_after_secs(remaining: Duration) -> u64 {
    let millis = remaining.num_milliseconds().max(0) as u64;
    millis.div_ceil(1000).max(1)
}
