// ISO 20022 temporal leaf values
//
// ISODate, ISOTime and ISODateTime share the same chrono foundation but each
// renders its own fixed-width text. Fields pick the type, the encoder never
// inspects the value to choose a format.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveTime, Utc};
use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `HH:MM:SS`
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// `YYYY-MM-DDTHH:MM:SS+HHMM`, offset without colon
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Earliest year that renders as four digits
pub const MIN_YEAR: i32 = 0;

/// Latest year that renders as four digits
pub const MAX_YEAR: i32 = 9999;

fn check_year(year: i32, value: &dyn fmt::Display) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::InvalidTemporal(format!(
            "{}: year outside {}..={}",
            value, MIN_YEAR, MAX_YEAR
        )))
    }
}

/// Calendar date (ISODate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    /// Wrap a date, rejecting years that do not fit `YYYY`
    pub fn new(date: NaiveDate) -> Result<Self> {
        check_year(date.year(), &date)?;
        Ok(Self(date))
    }

    /// Build from calendar fields, rejecting dates that do not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::InvalidTemporal(format!("{:04}-{:02}-{:02}", year, month, day))
        })?;
        Self::new(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for IsoDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::new(date)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Wall-clock time without offset (ISOTime)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime(NaiveTime);

impl IsoTime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(|| {
                Error::InvalidTemporal(format!("{:02}:{:02}:{:02}", hour, minute, second))
            })
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for IsoTime {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl fmt::Display for IsoTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

/// Instant with its UTC offset (ISODateTime)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoDateTime(DateTime<FixedOffset>);

impl IsoDateTime {
    /// Wrap an instant
    ///
    /// The local year must fit `YYYY` and the offset must be whole minutes,
    /// since `+HHMM` cannot carry seconds.
    pub fn new(date_time: DateTime<FixedOffset>) -> Result<Self> {
        check_year(date_time.year(), &date_time)?;
        if date_time.offset().local_minus_utc() % 60 != 0 {
            return Err(Error::InvalidTemporal(format!(
                "{}: offset {} is not a whole number of minutes",
                date_time,
                date_time.offset()
            )));
        }
        Ok(Self(date_time))
    }

    /// Current time in the local offset, or UTC if the local offset is not
    /// representable
    pub fn now() -> Self {
        let now = Local::now();
        Self::new(now.fixed_offset()).unwrap_or(Self(now.with_timezone(&Utc).fixed_offset()))
    }

    /// UTC instant, rendered with a `+0000` offset
    pub fn from_utc(date_time: DateTime<Utc>) -> Result<Self> {
        Self::new(date_time.fixed_offset())
    }

    /// Parse an RFC 3339 timestamp such as `2024-01-15T10:30:00+01:00`
    pub fn parse_rfc3339(value: &str) -> Result<Self> {
        let date_time = DateTime::parse_from_rfc3339(value)
            .map_err(|e| Error::InvalidTemporal(format!("{}: {}", value, e)))?;
        Self::new(date_time)
    }

    pub fn date_time(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl TryFrom<DateTime<FixedOffset>> for IsoDateTime {
    type Error = Error;

    fn try_from(date_time: DateTime<FixedOffset>) -> Result<Self> {
        Self::new(date_time)
    }
}

impl TryFrom<DateTime<Utc>> for IsoDateTime {
    type Error = Error;

    fn try_from(date_time: DateTime<Utc>) -> Result<Self> {
        Self::from_utc(date_time)
    }
}

impl fmt::Display for IsoDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

macro_rules! serialize_as_text {
    ($($name:ty),+) => {
        $(
            impl Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_str(self)
                }
            }
        )+
    };
}

serialize_as_text!(IsoDate, IsoTime, IsoDateTime);
