//! Records persisted by the form store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque owner identity. The core never authenticates; callers resolve
/// the user upstream and pass the id through the actions layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A durable form record.
///
/// `content` is the serialized element sequence; `None` until the owner
/// saves a draft. `share_token` is the public handle visitors use; it never
/// changes after creation. `visits` and `submissions` are traffic counters
/// incremented by the store itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub id: u64,
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub content: Option<String>,
    pub published: bool,
    pub share_token: String,
    pub visits: u64,
    pub submissions: u64,
    pub created_at: DateTime<Utc>,
}

/// One visitor submission. Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmissionRecord {
    pub form_id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Traffic aggregates across an owner's forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormStats {
    pub visits: u64,
    pub submissions: u64,
    pub submission_rate: f64,
    pub bounce_rate: f64,
}

impl FormStats {
    /// Derives the rates from raw counters. The submission rate of an
    /// unvisited form is zero, so its bounce rate reads as 100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counters(visits: u64, submissions: u64) -> Self {
        let submission_rate = if visits > 0 {
            submissions as f64 / visits as f64 * 100.0
        } else {
            0.0
        };
        let bounce_rate = 100.0 - submission_rate;
        Self {
            visits,
            submissions,
            submission_rate,
            bounce_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_rates() {
        let stats = FormStats::from_counters(200, 50);
        assert!((stats.submission_rate - 25.0).abs() < f64::EPSILON);
        assert!((stats.bounce_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_zero_visits_bounce_everything() {
        let stats = FormStats::from_counters(0, 0);
        assert_eq!(stats.submission_rate, 0.0);
        assert!((stats.bounce_rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::from("u1").to_string(), "u1");
    }
}
