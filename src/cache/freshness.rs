// Freshness policy shared by all cache keys.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// Default TTL for remote metadata: 1 hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Check if a value fetched at `fetched_at` is still fresh at `now`.
///
/// Fresh means `now - fetched_at < ttl`, compared as signed durations, so a
/// timestamp in the future has a negative age and counts as fresh. A TTL too
/// large for a signed duration saturates.
pub fn is_fresh(fetched_at: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
    now.signed_duration_since(fetched_at) < ttl
}
