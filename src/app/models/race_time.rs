//! Race time value type
//!
//! A `RaceTime` is the elapsed time of a finisher, held to the microsecond and
//! rendered in HyTek clock notation (`M:SS.ff`). Arithmetic with plain numbers
//! treats the number as seconds and always yields another `RaceTime`, so derived
//! quantities such as averages stay typed as race times.

use crate::constants::{
    METERS_PER_MILE, MICROS_PER_CENTISECOND, MICROS_PER_SECOND, SECONDS_PER_MINUTE,
};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;
use std::time::Duration;

/// Elapsed race time, never negative
///
/// Equality, ordering and hashing compare the total elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RaceTime {
    micros: u64,
}

impl RaceTime {
    pub const ZERO: RaceTime = RaceTime { micros: 0 };
    pub const MAX: RaceTime = RaceTime { micros: u64::MAX };

    /// Create a race time from a number of seconds
    ///
    /// The value is rounded to the nearest microsecond. Negative and NaN inputs
    /// saturate to zero.
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            micros: (seconds * MICROS_PER_SECOND as f64).round() as u64,
        }
    }

    /// Create a race time from whole microseconds
    pub const fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    /// Create a race time from minutes and (possibly fractional) seconds
    ///
    /// Saturates at the largest representable time.
    pub fn from_minutes_seconds(minutes: u64, seconds: f64) -> Self {
        Self::checked_from_minutes_seconds(minutes, seconds).unwrap_or(Self::MAX)
    }

    /// Like [`RaceTime::from_minutes_seconds`], `None` when the total overflows
    pub fn checked_from_minutes_seconds(minutes: u64, seconds: f64) -> Option<Self> {
        minutes
            .checked_mul(SECONDS_PER_MINUTE * MICROS_PER_SECOND)
            .and_then(|micros| micros.checked_add(Self::from_seconds(seconds).micros))
            .map(Self::from_micros)
    }

    /// Parse HyTek clock notation
    ///
    /// Accepts a bare seconds value (`"777"`, `"12.5"`) or `minutes:seconds`
    /// (`"24:44.80"`). In the colon form the seconds must be below 60.
    ///
    /// ```
    /// use hytek::RaceTime;
    ///
    /// let time = RaceTime::parse("24:44.8").unwrap();
    /// assert_eq!(time, RaceTime::from_seconds(24.0 * 60.0 + 44.8));
    /// assert_eq!(time.to_string(), "24:44.80");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();

        match parts.as_slice() {
            [seconds] => {
                let seconds = parse_seconds(text, seconds)?;
                if seconds * MICROS_PER_SECOND as f64 >= u64::MAX as f64 {
                    return Err(Error::format(text, "seconds out of range"));
                }
                Ok(Self::from_seconds(seconds))
            }
            [minutes, seconds] => {
                let minutes = minutes.parse::<u64>().map_err(|e| {
                    Error::format(text, format!("invalid minutes '{}' ({})", minutes, e))
                })?;
                let seconds = parse_seconds(text, seconds)?;
                if seconds >= SECONDS_PER_MINUTE as f64 {
                    return Err(Error::format(
                        text,
                        format!("seconds {} must be below 60", seconds),
                    ));
                }
                Self::checked_from_minutes_seconds(minutes, seconds)
                    .ok_or_else(|| Error::format(text, "minutes out of range"))
            }
            _ => Err(Error::format(text, "more than one ':' separator")),
        }
    }

    /// Total elapsed microseconds
    pub fn as_micros(&self) -> u64 {
        self.micros
    }

    /// Total elapsed seconds
    pub fn as_seconds(&self) -> f64 {
        self.micros as f64 / MICROS_PER_SECOND as f64
    }

    /// Equivalent standard library duration
    pub fn as_duration(&self) -> Duration {
        Duration::from_micros(self.micros)
    }

    pub fn minutes(&self) -> u64 {
        self.whole_seconds() / SECONDS_PER_MINUTE
    }

    /// Whole seconds past the minute, in `0..60`
    pub fn seconds(&self) -> u64 {
        self.whole_seconds() % SECONDS_PER_MINUTE
    }

    /// Hundredths of a second past the whole second, truncated
    pub fn centiseconds(&self) -> u64 {
        (self.micros % MICROS_PER_SECOND) / MICROS_PER_CENTISECOND
    }

    fn whole_seconds(&self) -> u64 {
        self.micros / MICROS_PER_SECOND
    }

    /// Average of a collection of race times, or `None` when it is empty
    pub fn mean<'a, I>(times: I) -> Option<RaceTime>
    where
        I: IntoIterator<Item = &'a RaceTime>,
    {
        let (total, count) = times
            .into_iter()
            .fold((0u128, 0u128), |(total, count), time| {
                (total + u128::from(time.micros), count + 1)
            });
        if count == 0 {
            return None;
        }
        let mean = (total as f64 / count as f64).round() as u64;
        Some(Self::from_micros(mean))
    }

    /// Split the time into `divisor` equal parts, `None` when `divisor` is zero
    ///
    /// ```
    /// use hytek::RaceTime;
    ///
    /// let total = RaceTime::parse("125:00.00").unwrap();
    /// assert_eq!(total.checked_div(5).unwrap().to_string(), "25:00.00");
    /// assert_eq!(total.checked_div(0), None);
    /// ```
    pub fn checked_div(self, divisor: u32) -> Option<RaceTime> {
        self.micros
            .checked_div(u64::from(divisor))
            .map(Self::from_micros)
    }

    /// Pace per statute mile over a race of the given length in meters
    pub fn mile_pace(&self, distance_meters: u32) -> Option<RaceTime> {
        if distance_meters == 0 {
            return None;
        }
        Some(*self / f64::from(distance_meters) * METERS_PER_MILE)
    }
}

/// Parse a non-negative, finite seconds component
fn parse_seconds(text: &str, seconds: &str) -> Result<f64> {
    let value = seconds
        .parse::<f64>()
        .map_err(|e| Error::format(text, format!("invalid seconds '{}' ({})", seconds, e)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::format(
            text,
            format!("seconds '{}' must be a finite, non-negative number", seconds),
        ));
    }
    Ok(value)
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}.{:02}",
            self.minutes(),
            self.seconds(),
            self.centiseconds()
        )
    }
}

impl FromStr for RaceTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Duration> for RaceTime {
    fn from(duration: Duration) -> Self {
        Self::from_micros(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
    }
}

impl From<RaceTime> for Duration {
    fn from(time: RaceTime) -> Self {
        time.as_duration()
    }
}

// =============================================================================
// Arithmetic
// =============================================================================
//
// Plain `f64` operands are seconds for addition and subtraction, and scale
// factors for multiplication and division. Results below zero saturate to zero.

impl Add for RaceTime {
    type Output = RaceTime;

    fn add(self, rhs: RaceTime) -> RaceTime {
        RaceTime::from_micros(self.micros.saturating_add(rhs.micros))
    }
}

impl Sub for RaceTime {
    type Output = RaceTime;

    fn sub(self, rhs: RaceTime) -> RaceTime {
        RaceTime::from_micros(self.micros.saturating_sub(rhs.micros))
    }
}

impl Add<f64> for RaceTime {
    type Output = RaceTime;

    fn add(self, seconds: f64) -> RaceTime {
        RaceTime::from_seconds(self.as_seconds() + seconds)
    }
}

impl Add<RaceTime> for f64 {
    type Output = RaceTime;

    fn add(self, time: RaceTime) -> RaceTime {
        time + self
    }
}

impl Sub<f64> for RaceTime {
    type Output = RaceTime;

    fn sub(self, seconds: f64) -> RaceTime {
        RaceTime::from_seconds(self.as_seconds() - seconds)
    }
}

impl Sub<RaceTime> for f64 {
    type Output = RaceTime;

    fn sub(self, time: RaceTime) -> RaceTime {
        RaceTime::from_seconds(self - time.as_seconds())
    }
}

impl Mul<f64> for RaceTime {
    type Output = RaceTime;

    fn mul(self, factor: f64) -> RaceTime {
        RaceTime::from_seconds(self.as_seconds() * factor)
    }
}

impl Mul<RaceTime> for f64 {
    type Output = RaceTime;

    fn mul(self, time: RaceTime) -> RaceTime {
        time * self
    }
}

impl Div<f64> for RaceTime {
    type Output = RaceTime;

    fn div(self, divisor: f64) -> RaceTime {
        RaceTime::from_seconds(self.as_seconds() / divisor)
    }
}

impl Mul<u32> for RaceTime {
    type Output = RaceTime;

    fn mul(self, factor: u32) -> RaceTime {
        RaceTime::from_micros(self.micros.saturating_mul(u64::from(factor)))
    }
}

impl Div<u32> for RaceTime {
    type Output = RaceTime;

    /// # Panics
    ///
    /// Panics when `divisor` is zero, as `Duration` does. Use
    /// [`RaceTime::checked_div`] when the divisor may be zero.
    fn div(self, divisor: u32) -> RaceTime {
        match self.checked_div(divisor) {
            Some(time) => time,
            None => panic!("divide by zero error when dividing race time by scalar"),
        }
    }
}

impl AddAssign for RaceTime {
    fn add_assign(&mut self, rhs: RaceTime) {
        *self = *self + rhs;
    }
}

impl SubAssign for RaceTime {
    fn sub_assign(&mut self, rhs: RaceTime) {
        *self = *self - rhs;
    }
}

impl Sum for RaceTime {
    fn sum<I: Iterator<Item = RaceTime>>(iter: I) -> RaceTime {
        iter.fold(RaceTime::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a RaceTime> for RaceTime {
    fn sum<I: Iterator<Item = &'a RaceTime>>(iter: I) -> RaceTime {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for RaceTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RaceTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        RaceTime::parse(&text).map_err(serde::de::Error::custom)
    }
}
