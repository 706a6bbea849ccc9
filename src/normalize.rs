use crate::fetch::RawDayRecord;
use crate::holiday::HolidayObservation;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Resolve a possibly year-less date string against the nominal fetch year.
///
/// The upstream document mixes `MM-DD`, truncated-year, and full
/// `YYYY-MM-DD` keys within one response:
///   - two dash-separated components are prefixed with the nominal year;
///   - three components whose first is not 4 digits have it replaced with
///     the nominal year;
///   - anything else is parsed as given.
pub fn resolve_date(raw: &str, year: i32) -> Result<NaiveDate, chrono::ParseError> {
    let parts: Vec<&str> = raw.split('-').collect();
    let qualified = match parts.as_slice() {
        [_, _] => format!("{year}-{raw}"),
        [first, month, day] if first.len() != 4 => format!("{year}-{month}-{day}"),
        _ => raw.to_string(),
    };
    NaiveDate::parse_from_str(&qualified, "%Y-%m-%d")
}

/// Turn the raw per-day mapping into single-day holiday observations.
///
/// Entries flagged as workdays are ignored. A date that fails to resolve is
/// logged and skipped without aborting the batch. Dates more than
/// `lookback_days` in the past relative to `today` are dropped; the slack
/// keeps entries from the last few weeks despite clock or timezone skew.
pub fn normalize_records(
    records: &HashMap<String, RawDayRecord>,
    year: i32,
    today: NaiveDate,
    lookback_days: i64,
) -> Vec<HolidayObservation> {
    let mut observations = Vec::new();
    let mut failed = 0usize;

    for (date_str, record) in records {
        if !record.holiday {
            continue;
        }
        let date = match resolve_date(date_str, year) {
            Ok(date) => date,
            Err(err) => {
                log::warn!("skipping holiday entry '{date_str}': {err}");
                failed += 1;
                continue;
            }
        };
        if (date - today).num_days() < -lookback_days {
            continue;
        }
        observations.push(HolidayObservation {
            date,
            name: record.name.clone(),
            original_name: record.name.clone(),
        });
    }

    if failed > 0 {
        log::warn!("{failed} holiday entries failed to parse and were skipped");
    }
    observations
}
