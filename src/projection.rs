use crate::holiday::HolidayPeriod;
use chrono::NaiveDate;
use std::fmt;

/// The derived "next holiday" view over the resident period list.
///
/// `current` is absent once the year's list is exhausted; `upcoming_name`
/// is absent when nothing follows the current period.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub countdown_days: i64,
    pub current: Option<HolidayPeriod>,
    pub upcoming_name: Option<String>,
}

#[derive(Debug)]
pub enum ProjectionError {
    InvalidPeriod(String),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidPeriod(msg) => write!(f, "invalid holiday period: {msg}"),
        }
    }
}

impl std::error::Error for ProjectionError {}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Compute the countdown to the first period starting today or later, plus
/// the name of the period after it.
///
/// Expects `periods` sorted ascending by start date. Inconsistent periods
/// (typically malformed cached data) surface as an error instead of a
/// nonsensical countdown.
pub fn project(periods: &[HolidayPeriod], today: NaiveDate) -> ProjectionResult<Projection> {
    for period in periods {
        if !period.is_consistent() {
            return Err(ProjectionError::InvalidPeriod(format!(
                "'{}' starting {} has {} member dates but duration {}",
                period.name,
                period.start_date,
                period.member_dates.len(),
                period.duration_days
            )));
        }
    }

    let Some(current) = periods
        .iter()
        .find(|period| period.start_date >= today)
        .cloned()
    else {
        return Ok(Projection {
            countdown_days: 0,
            current: None,
            upcoming_name: None,
        });
    };

    let upcoming_name = periods
        .iter()
        .find(|period| period.start_date > current.start_date)
        .map(|period| period.name.clone());
    let countdown_days = (current.start_date - today).num_days();

    Ok(Projection {
        countdown_days,
        current: Some(current),
        upcoming_name,
    })
}
