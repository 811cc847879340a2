use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// A race time in whole milliseconds.
///
/// The wire form is `MM:SS.mmm`: minutes and seconds are unbounded-width
/// digit runs, the fractional part is one to three digits and is
/// right-padded with zeros to milliseconds (`"1:05.3"` reads as 300 ms,
/// not 3 ms). Anything else fails to parse; a malformed string is never
/// silently read as zero.
///
/// # Examples
///
/// ```
/// use scoring::models::RaceTime;
///
/// let time = RaceTime::parse("01:05.300").unwrap();
/// assert_eq!(time.as_millis(), 65_300);
/// assert_eq!(time.to_string(), "01:05.300");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaceTime(u64);

impl RaceTime {
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn parse(text: &str) -> Result<Self> {
        let malformed = || ScoringError::MalformedTime(text.to_string());

        let (minutes, rest) = text.split_once(':').ok_or_else(malformed)?;
        let (seconds, fraction) = rest.split_once('.').ok_or_else(malformed)?;

        if minutes.is_empty() || seconds.is_empty() || fraction.is_empty() {
            return Err(malformed());
        }
        if fraction.len() > 3 {
            return Err(malformed());
        }
        if ![minutes, seconds, fraction].iter().all(|p| is_digits(p)) {
            return Err(malformed());
        }

        let minutes: u64 = minutes.parse().map_err(|_| malformed())?;
        let seconds: u64 = seconds.parse().map_err(|_| malformed())?;
        let mut millis: u64 = fraction.parse().map_err(|_| malformed())?;
        for _ in fraction.len()..3 {
            millis *= 10;
        }

        minutes
            .checked_mul(60_000)
            .and_then(|total| total.checked_add(seconds.checked_mul(1_000)?))
            .and_then(|total| total.checked_add(millis))
            .map(Self)
            .ok_or_else(malformed)
    }

    /// Formats an optional millisecond count for display. Absent and zero
    /// values stay absent; they never render as `"00:00.000"`.
    pub fn display_millis(ms: Option<u64>) -> Option<String> {
        match ms {
            Some(ms) if ms > 0 => Some(Self(ms).to_string()),
            _ => None,
        }
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 / 60_000;
        let seconds = (self.0 % 60_000) / 1_000;
        let millis = self.0 % 1_000;
        write!(f, "{minutes:02}:{seconds:02}.{millis:03}")
    }
}

impl FromStr for RaceTime {
    type Err = ScoringError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}
