use chrono::{DateTime, Datelike, Local, NaiveDate};
use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::config::SensorConfig;
use crate::fetch::HolidaySource;
use crate::grouping::group_observations;
use crate::holiday::HolidayPeriod;
use crate::normalize::normalize_records;
use crate::persistence::{CacheSnapshot, HolidayStore};
use crate::projection::{self, Projection};
use crate::scheduler::{RefreshState, Throttle};

/// Name shown once the year's holiday list is exhausted.
pub const NO_UPCOMING_HOLIDAY: &str = "no more holidays this year";
/// Next-holiday attribute value when nothing follows the current period.
pub const NO_NEXT_HOLIDAY: &str = "none";
/// Name shown before the first load completes.
pub const LOADING: &str = "loading";

/// The scalar part of the observable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorValue {
    /// No data loaded yet.
    Unknown,
    /// Whole days until the next holiday period starts.
    Days(i64),
    /// Projection failed; details are in the name attribute.
    Error,
}

/// The externally observable state: a value plus the attribute set the
/// display layer renders. Always replaced as one unit, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorState {
    pub value: SensorValue,
    pub holiday_name: String,
    pub duration_days: Option<i64>,
    pub countdown_days: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub next_holiday: Option<String>,
}

impl SensorState {
    fn loading() -> Self {
        Self {
            value: SensorValue::Unknown,
            holiday_name: LOADING.to_string(),
            duration_days: None,
            countdown_days: None,
            start_date: None,
            next_holiday: None,
        }
    }

    fn from_projection(projection: &Projection) -> Self {
        match &projection.current {
            Some(period) => Self {
                value: SensorValue::Days(projection.countdown_days),
                holiday_name: period.name.clone(),
                duration_days: Some(period.duration_days),
                countdown_days: Some(projection.countdown_days),
                start_date: Some(period.start_date),
                next_holiday: Some(
                    projection
                        .upcoming_name
                        .clone()
                        .unwrap_or_else(|| NO_NEXT_HOLIDAY.to_string()),
                ),
            },
            None => Self {
                value: SensorValue::Days(0),
                holiday_name: NO_UPCOMING_HOLIDAY.to_string(),
                duration_days: Some(0),
                countdown_days: Some(0),
                start_date: None,
                next_holiday: None,
            },
        }
    }

    fn error(summary: &str) -> Self {
        Self {
            value: SensorValue::Error,
            holiday_name: format!("processing error: {summary}"),
            duration_days: None,
            countdown_days: None,
            start_date: None,
            next_holiday: None,
        }
    }
}

/// Outcome of a single update invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    Refreshed,
    NotDue,
    Throttled,
    AlreadyRunning,
    Failed,
}

struct Inner {
    holidays: Vec<HolidayPeriod>,
    refresh: RefreshState,
    throttle: Throttle,
    state: SensorState,
}

/// Orchestrates the refresh pipeline and holds the observable state.
///
/// The host calls `attach` once and `update` on its own schedule; both hooks
/// swallow failures into logged messages, keeping the prior good state
/// resident (stale-but-valid data beats no data).
pub struct HolidayCountdownSensor<S, C> {
    source: C,
    store: S,
    config: SensorConfig,
    inner: RwLock<Inner>,
    refresh_guard: Mutex<()>,
}

impl<S: HolidayStore, C: HolidaySource> HolidayCountdownSensor<S, C> {
    pub fn new(source: C, store: S, config: SensorConfig) -> Self {
        let inner = Inner {
            holidays: Vec::new(),
            refresh: RefreshState::new(),
            throttle: Throttle::new(config.update_cooldown),
            state: SensorState::loading(),
        };
        Self {
            source,
            store,
            config,
            inner: RwLock::new(inner),
            refresh_guard: Mutex::new(()),
        }
    }

    pub fn state(&self) -> SensorState {
        self.inner.read().state.clone()
    }

    pub fn holidays(&self) -> Vec<HolidayPeriod> {
        self.inner.read().holidays.clone()
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.inner.read().refresh.last_refreshed
    }

    /// On-attach hook: restore the cache, then force a refresh when it
    /// comes back empty.
    pub async fn attach(&self) {
        self.attach_at(Local::now()).await;
    }

    pub async fn attach_at(&self, now: DateTime<Local>) {
        let restored = match self.store.load() {
            // An empty document is treated like no cache at all so the
            // refresh below is not suppressed by a stale timestamp.
            Ok(Some(snapshot)) if !snapshot.holidays.is_empty() => {
                let count = snapshot.holidays.len();
                let mut inner = self.inner.write();
                inner.holidays = snapshot.holidays;
                inner.refresh.last_refreshed = snapshot.last_refreshed;
                log::debug!("restored {count} cached holiday periods");
                true
            }
            Ok(_) => false,
            Err(err) => {
                log::error!("failed to load holiday cache: {err}");
                false
            }
        };

        if restored {
            self.reproject(now.date_naive());
        } else {
            self.refresh(now).await;
        }
    }

    /// Periodic update hook, rate limited by the configured cooldown.
    pub async fn update(&self) -> UpdateOutcome {
        self.update_at(Local::now()).await
    }

    pub async fn update_at(&self, now: DateTime<Local>) -> UpdateOutcome {
        {
            let mut inner = self.inner.write();
            if !inner.throttle.allow(now) {
                return UpdateOutcome::Throttled;
            }
        }
        self.refresh(now).await
    }

    /// Run one refresh cycle: fetch, normalize, group, persist, reproject.
    /// At most one cycle runs at a time; a trigger arriving while one is in
    /// flight is a no-op.
    async fn refresh(&self, now: DateTime<Local>) -> UpdateOutcome {
        let Ok(_guard) = self.refresh_guard.try_lock() else {
            log::debug!("refresh already in flight, skipping");
            return UpdateOutcome::AlreadyRunning;
        };

        let due = {
            let inner = self.inner.read();
            inner.refresh.is_due(now, self.config.force_refresh_days)
        };
        if !due {
            return UpdateOutcome::NotDue;
        }

        let year = now.year();
        let records = match self.source.fetch_year(year).await {
            Ok(records) => records,
            Err(err) => {
                log::error!("holiday fetch for {year} failed: {err}");
                return UpdateOutcome::Failed;
            }
        };

        let today = now.date_naive();
        let observations = normalize_records(&records, year, today, self.config.lookback_days);
        let holidays = group_observations(&observations);
        log::info!("fetched {} holiday periods for {year}", holidays.len());

        let snapshot = CacheSnapshot {
            holidays: holidays.clone(),
            last_refreshed: Some(now),
        };
        if let Err(err) = self.store.save(&snapshot) {
            log::error!("failed to persist holiday cache: {err}");
            return UpdateOutcome::Failed;
        }

        {
            let mut inner = self.inner.write();
            inner.holidays = holidays;
            inner.refresh.mark_refreshed(now);
        }
        self.reproject(today);
        UpdateOutcome::Refreshed
    }

    /// Recompute the observable state from the resident holiday list.
    fn reproject(&self, today: NaiveDate) {
        let mut inner = self.inner.write();
        match projection::project(&inner.holidays, today) {
            Ok(projection) => inner.state = SensorState::from_projection(&projection),
            Err(err) => {
                log::error!("countdown projection failed: {err}");
                inner.state = SensorState::error(&err.to_string());
            }
        }
    }
}
