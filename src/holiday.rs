use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// A single observed holiday day, before grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayObservation {
    pub date: NaiveDate,
    pub name: String,
    pub original_name: String,
}

/// A contiguous named holiday range derived from one or more observations
/// sharing a base name.
///
/// Invariant: `member_dates` is non-empty and sorted ascending,
/// `start_date` equals the first member date, and `duration_days` equals
/// the member count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolidayPeriod {
    pub name: String,
    pub start_date: NaiveDate,
    pub duration_days: i64,
    pub member_dates: Vec<NaiveDate>,
}

impl HolidayPeriod {
    /// Build a period from a start date and day count, with member dates
    /// reconstructed as the consecutive run from the start. This is how
    /// periods come back from the cache, which only stores the start and
    /// the duration.
    pub fn from_start(name: impl Into<String>, start_date: NaiveDate, duration_days: i64) -> Self {
        let member_dates = (0..duration_days)
            .map(|offset| start_date + Duration::days(offset))
            .collect();
        Self {
            name: name.into(),
            start_date,
            duration_days,
            member_dates,
        }
    }

    /// Check the struct invariant. Cached data that survived decoding in a
    /// malformed shape is caught here before projection.
    pub fn is_consistent(&self) -> bool {
        !self.member_dates.is_empty()
            && self.member_dates.windows(2).all(|pair| pair[0] <= pair[1])
            && self.start_date == self.member_dates[0]
            && self.duration_days == self.member_dates.len() as i64
    }
}
