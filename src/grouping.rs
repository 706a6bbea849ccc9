use crate::holiday::{HolidayObservation, HolidayPeriod};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Strip a trailing `"(N月"` month qualifier from a holiday display name.
///
/// The upstream source disambiguates a festival straddling two Gregorian
/// months by suffixing the month in parentheses; both halves belong to the
/// same logical period, so the qualifier is dropped for grouping. A
/// qualifier at the very start of the name is not a suffix and is kept.
pub fn base_name(name: &str) -> &str {
    for month in 1..=12 {
        let qualifier = format!("({month}月");
        if let Some(pos) = name.find(&qualifier) {
            if pos > 0 {
                return name[..pos].trim();
            }
        }
    }
    name
}

/// Merge single-day observations into holiday periods.
///
/// Observations are partitioned by base name; each group becomes one period
/// with its member dates sorted ascending, the earliest as the start date,
/// and the member count as the duration. The output is sorted ascending by
/// start date.
pub fn group_observations(observations: &[HolidayObservation]) -> Vec<HolidayPeriod> {
    let mut groups: HashMap<String, Vec<NaiveDate>> = HashMap::new();
    for observation in observations {
        groups
            .entry(base_name(&observation.name).to_string())
            .or_default()
            .push(observation.date);
    }

    let mut periods: Vec<HolidayPeriod> = groups
        .into_iter()
        .map(|(name, mut dates)| {
            dates.sort();
            HolidayPeriod {
                name,
                start_date: dates[0],
                duration_days: dates.len() as i64,
                member_dates: dates,
            }
        })
        .collect();
    periods.sort_by_key(|period| period.start_date);
    periods
}
