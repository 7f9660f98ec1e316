//! Creation timestamps within the business-hour window.

use crate::generator::GeneratorError;
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use rand::Rng;
use sales_core::CIVIL_TIMEZONE;

/// Format of the creation timestamp column.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hours of the day, `[start_hour, end_hour]`, during which sales are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessWindow {
    start_hour: u32,
    end_hour: u32,
}

impl BusinessWindow {
    /// Requires `start_hour < end_hour <= 23` so every timestamp stays on the
    /// batch date.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, GeneratorError> {
        if start_hour >= end_hour || end_hour > 23 {
            return Err(GeneratorError::InvalidWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Length of the window in seconds.
    pub fn span_seconds(&self) -> i64 {
        i64::from(self.end_hour - self.start_hour) * 3600
    }
}

impl Default for BusinessWindow {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 22,
        }
    }
}

/// Generate a creation timestamp on `date` in the civil timezone.
///
/// Starts at `start_hour:00:00` and adds a uniform offset of
/// `0..=span_seconds` seconds, so `end_hour:00:00` itself is reachable.
pub fn generate_created_at<R: Rng>(
    rng: &mut R,
    date: NaiveDate,
    window: &BusinessWindow,
) -> DateTime<Tz> {
    let offset = rng.gen_range(0..=window.span_seconds());
    let local = date.and_time(NaiveTime::MIN)
        + TimeDelta::hours(i64::from(window.start_hour))
        + TimeDelta::seconds(offset);
    localize(local)
}

fn localize(local: NaiveDateTime) -> DateTime<Tz> {
    match CIVIL_TIMEZONE.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Wall-clock gap; Asia/Kolkata has none since 1945.
        LocalResult::None => CIVIL_TIMEZONE.from_utc_datetime(&local),
    }
}
