use crate::models::timestamp;
use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DISPLAY_FORMAT: &str = "%Y-%m-%d";
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A calendar birth date.
///
/// Always transmitted as UTC midnight (`YYYY-MM-DDT00:00:00Z`), whatever
/// time-of-day or offset the input carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn to_utc_midnight(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn to_wire(&self) -> String {
        self.to_utc_midnight().format(WIRE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for BirthDate {
    type Err = CoreError;

    /// Accepts `YYYY-MM-DD`, naive date-times and RFC 3339. Values with an
    /// offset are converted to UTC before the date is taken.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        timestamp::parse(s)
            .map(|instant| Self(instant.date_naive()))
            .ok_or_else(|| CoreError::invalid_date(s))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
