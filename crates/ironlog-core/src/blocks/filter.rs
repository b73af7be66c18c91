//! Caller-supplied pre-filter applied to logs before analysis.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::model::{end_of_day, start_of_day, TrainingBlock, WorkoutLog};

/// Program and date filter.
///
/// Both date bounds are inclusive; the end bound covers its whole day.
/// `duration_days` without a start date selects the trailing window ending
/// at the end bound (or at `now`). A window reaching past the representable
/// calendar has no lower bound.
///
/// Program selection follows block membership: a log counts for a program
/// by `programId`, or, when it has none, by its legacy `programName`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    /// Empty means every program.
    #[serde(default)]
    pub program_ids: Vec<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration_days: Option<u32>,
}

impl LogFilter {
    /// Build a filter from raw request parameters.
    pub fn from_params(
        program_ids: Vec<String>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        duration_days: Option<u32>,
    ) -> Result<Self, FilterError> {
        let parse = |field: &str, value: Option<&str>| -> Result<Option<NaiveDate>, FilterError> {
            value
                .map(|v| {
                    NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|_| {
                        FilterError::InvalidDate {
                            field: field.to_string(),
                            value: v.to_string(),
                        }
                    })
                })
                .transpose()
        };

        let start_date = parse("startDate", start_date)?;
        let end_date = parse("endDate", end_date)?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(FilterError::InvertedRange { start, end });
            }
        }

        Ok(Self {
            program_ids,
            start_date,
            end_date,
            duration_days,
        })
    }

    /// Inclusive time bounds implied by the date fields.
    pub fn bounds(&self, now: DateTime<Utc>) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let upper = self.end_date.map(end_of_day);
        let lower = match (self.start_date, self.duration_days) {
            (Some(start), _) => Some(start_of_day(start)),
            (None, Some(days)) => Duration::try_days(i64::from(days))
                .and_then(|window| upper.unwrap_or(now).checked_sub_signed(window)),
            (None, None) => None,
        };
        (lower, upper)
    }

    pub fn has_date_bounds(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some() || self.duration_days.is_some()
    }

    /// Id of the program owning `log`, resolving legacy names against
    /// `programs`.
    fn owner<'p>(log: &'p WorkoutLog, programs: &'p [TrainingBlock]) -> Option<&'p str> {
        match (&log.program_id, &log.program_name) {
            (Some(id), _) => Some(id.as_str()),
            (None, Some(name)) => programs
                .iter()
                .find(|p| &p.name == name)
                .map(|p| p.id.as_str()),
            (None, None) => None,
        }
    }

    pub fn matches(&self, log: &WorkoutLog, programs: &[TrainingBlock], now: DateTime<Utc>) -> bool {
        if !self.program_ids.is_empty() {
            let owned = Self::owner(log, programs)
                .is_some_and(|id| self.program_ids.iter().any(|selected| selected == id));
            if !owned {
                return false;
            }
        }
        if !self.has_date_bounds() {
            return true;
        }
        let Some(at) = log.instant() else {
            return false;
        };
        let (lower, upper) = self.bounds(now);
        lower.map_or(true, |lower| at >= lower) && upper.map_or(true, |upper| at <= upper)
    }

    /// Logs passing the filter, in input order. `programs` resolves legacy
    /// logs that only carry a program name.
    pub fn apply<'a>(
        &self,
        logs: &'a [WorkoutLog],
        programs: &[TrainingBlock],
        now: DateTime<Utc>,
    ) -> Vec<&'a WorkoutLog> {
        logs.iter()
            .filter(|log| self.matches(log, programs, now))
            .collect()
    }
}
