//! Input data model: workout logs and training blocks.
//!
//! These are the shapes handed over by the persistence layer. Numeric set
//! fields are decoded leniently because older clients stored them as
//! strings; a field that cannot be read as a positive number simply
//! disqualifies the set from load computations.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A numeric field that may arrive as a number, a string, or garbage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl LooseNumber {
    /// Finite numeric value, if the field can be read as one.
    pub fn value(&self) -> Option<f64> {
        match self {
            LooseNumber::Number(n) => Some(*n),
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok(),
            LooseNumber::Other(_) => None,
        }
        .filter(|v| v.is_finite())
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

/// One logged set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    #[serde(default)]
    pub weight: Option<LooseNumber>,
    #[serde(default)]
    pub reps: Option<LooseNumber>,
    #[serde(default)]
    pub rpe: Option<LooseNumber>,
}

/// A set whose fields all passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedSet {
    pub weight: f64,
    pub reps: f64,
    /// Only present when the logged RPE is a positive number.
    pub rpe: Option<f64>,
}

impl SetRecord {
    /// Build a set from plain numbers.
    pub fn new(weight: f64, reps: f64, rpe: Option<f64>) -> Self {
        Self {
            weight: Some(weight.into()),
            reps: Some(reps.into()),
            rpe: rpe.map(LooseNumber::from),
        }
    }

    fn positive(field: &Option<LooseNumber>) -> Option<f64> {
        field.as_ref().and_then(LooseNumber::value).filter(|v| *v > 0.0)
    }

    /// Validated weight/reps/RPE, or `None` when weight or reps is missing,
    /// non-numeric or non-positive.
    pub fn parse(&self) -> Option<ParsedSet> {
        Some(ParsedSet {
            weight: Self::positive(&self.weight)?,
            reps: Self::positive(&self.reps)?,
            rpe: Self::positive(&self.rpe),
        })
    }

    /// Reps and RPE of a valid set that carries an RPE, the inputs of the
    /// stress model.
    pub fn effort(&self) -> Option<(f64, f64)> {
        let set = self.parse()?;
        Some((set.reps, set.rpe?))
    }
}

/// One exercise performed within a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

impl ExerciseEntry {
    pub fn new(name: impl Into<String>, sets: Vec<SetRecord>) -> Self {
        Self {
            name: name.into(),
            sets,
            ..Default::default()
        }
    }

    /// Whether the athlete explicitly flagged this entry as the block's
    /// primary lift.
    pub fn flagged_primary(&self) -> bool {
        self.is_primary == Some(true)
    }

    /// Validated sets, in logged order.
    pub fn parsed_sets(&self) -> impl Iterator<Item = ParsedSet> + '_ {
        self.sets.iter().filter_map(SetRecord::parse)
    }
}

/// One training session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    #[serde(default)]
    pub athlete_id: Option<String>,
    /// Owning training block. The segmentation key.
    #[serde(default)]
    pub program_id: Option<String>,
    /// Legacy logs carry the block name instead of its id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    pub date: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutLog {
    /// Parsed log timestamp.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.date)
    }
}

/// A week of the prescribed program. Only carried through; analytics never
/// look inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    #[serde(default)]
    pub sessions: Vec<serde_json::Value>,
}

/// A training block (program).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingBlock {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    /// `None` means the block is still running.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl TrainingBlock {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Inclusive membership window. The end is normalized to the last
    /// millisecond of its day and defaults to `now` for ongoing blocks.
    pub fn window(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = parse_instant(self.start_date.as_deref()?)?;
        let end = match self.end_date.as_deref() {
            Some(end) => end_of_day(parse_instant(end)?.date_naive()),
            None => now,
        };
        Some((start, end))
    }
}

/// Parse an ISO timestamp. Accepts RFC 3339, a naive date-time (read as
/// UTC) or a bare date (midnight UTC).
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)))
}

/// 23:59:59.999 on the given day.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(time))
}

/// Midnight at the start of the given day.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
