//! Scoring: turn counts to qualitative ratings, and round-time display.
//!
//! Pure functions only - no state, no side effects.

use serde::{Deserialize, Serialize};

/// Qualitative rating for a finished round.
///
/// Thresholds are fixed: 9 turns or fewer is `Master`, 10-13 `Trainer`,
/// 14-18 `Rookie`, 19 and up `Noob`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Master,
    Trainer,
    Rookie,
    Noob,
}

impl Rating {
    /// Player-facing message for the win screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Rating::Master => "Incredible! You have the memory of a true master!",
            Rating::Trainer => "Nice work, trainer - sharp eyes!",
            Rating::Rookie => "Not bad, rookie. Keep at it!",
            Rating::Noob => "Everyone starts somewhere...",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Rating::Master => "Master",
            Rating::Trainer => "Trainer",
            Rating::Rookie => "Rookie",
            Rating::Noob => "Noob",
        };
        write!(f, "{label}")
    }
}

/// Rate a finished round by its turn count.
///
/// Total over all turn counts.
///
/// ```
/// use memodex::scoring::{rate, Rating};
///
/// assert_eq!(rate(9), Rating::Master);
/// assert_eq!(rate(13), Rating::Trainer);
/// assert_eq!(rate(19), Rating::Noob);
/// ```
#[must_use]
pub fn rate(turns: u32) -> Rating {
    match turns {
        0..=9 => Rating::Master,
        10..=13 => Rating::Trainer,
        14..=18 => Rating::Rookie,
        _ => Rating::Noob,
    }
}

/// Format an elapsed round time for display.
///
/// Sub-minute rounds render as seconds with tenths (`"42.7s"`), longer
/// rounds as minutes and zero-padded seconds (`"2:05"`).
#[must_use]
pub fn format_elapsed(ms: u64) -> String {
    if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let total_secs = ms / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rate(0), Rating::Master);
        assert_eq!(rate(9), Rating::Master);
        assert_eq!(rate(10), Rating::Trainer);
        assert_eq!(rate(13), Rating::Trainer);
        assert_eq!(rate(14), Rating::Rookie);
        assert_eq!(rate(18), Rating::Rookie);
        assert_eq!(rate(19), Rating::Noob);
        assert_eq!(rate(1_000), Rating::Noob);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(format!("{}", Rating::Master), "Master");
        assert_eq!(format!("{}", Rating::Noob), "Noob");
    }

    #[test]
    fn test_messages_nonempty() {
        for rating in [Rating::Master, Rating::Trainer, Rating::Rookie, Rating::Noob] {
            assert!(!rating.message().is_empty());
        }
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0.0s");
        assert_eq!(format_elapsed(42_700), "42.7s");
        assert_eq!(format_elapsed(60_000), "1:00");
        assert_eq!(format_elapsed(125_000), "2:05");
    }
}
