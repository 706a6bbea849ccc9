use chrono::Duration;
use std::time::Duration as StdDuration;

/// Tunable settings for the refresh pipeline.
///
/// The windows default to the values the upstream data cadence was designed
/// around, but none of them is hardwired into the pipeline itself.
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Yearly holiday endpoint; the fetch year is appended as a path segment.
    pub endpoint: String,
    /// Hard timeout on the yearly fetch.
    pub fetch_timeout: StdDuration,
    /// Minimum interval between update invocations, independent of due-ness.
    pub update_cooldown: Duration,
    /// Observations more than this many days in the past are dropped during
    /// normalization.
    pub lookback_days: i64,
    /// A refresh is forced once the last successful one is older than this
    /// many days.
    pub force_refresh_days: i64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://timor.tech/api/holiday/year".to_string(),
            fetch_timeout: StdDuration::from_secs(8),
            update_cooldown: Duration::hours(6),
            lookback_days: 30,
            force_refresh_days: 30,
        }
    }
}
