use chrono::{DateTime, Duration, Local};

/// Tracks when holiday data was last successfully refreshed.
///
/// Mutated only after a fully successful fetch+normalize+persist cycle, so
/// a failed cycle leaves the next due-check ready to retry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshState {
    pub last_refreshed: Option<DateTime<Local>>,
}

impl RefreshState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new fetch should be attempted, evaluated against the
    /// caller's clock:
    ///   - due when no refresh has ever succeeded;
    ///   - due when the calendar date has advanced past the last refresh;
    ///   - forced once more than `force_after_days` whole days have
    ///     elapsed, as a safety net.
    pub fn is_due(&self, now: DateTime<Local>, force_after_days: i64) -> bool {
        let Some(last) = self.last_refreshed else {
            return true;
        };
        if now.date_naive() > last.date_naive() {
            return true;
        }
        (now.date_naive() - last.date_naive()).num_days() > force_after_days
    }

    pub fn mark_refreshed(&mut self, now: DateTime<Local>) {
        self.last_refreshed = Some(now);
    }
}

/// Minimum-interval guard on the update path, independent of due-ness.
///
/// Bounds load on the remote source no matter how often the host invokes
/// the periodic hook.
#[derive(Debug)]
pub struct Throttle {
    cooldown: Duration,
    last_attempt: Option<DateTime<Local>>,
}

impl Throttle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_attempt: None,
        }
    }

    /// Returns true when the cooldown window since the previous allowed
    /// attempt has elapsed, recording `now` as the new attempt.
    pub fn allow(&mut self, now: DateTime<Local>) -> bool {
        if let Some(last) = self.last_attempt {
            if now - last < self.cooldown {
                return false;
            }
        }
        self.last_attempt = Some(now);
        true
    }
}
