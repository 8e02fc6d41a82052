use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Reference date used when rolling a departure hour forward by a flight
/// duration. Only the resulting hour-of-day matters; the date itself is
/// arbitrary and exists so that crossings past midnight wrap cleanly.
const REFERENCE_DATE: (i32, u32, u32) = (2000, 1, 1);

/// Six named segments of the 24-hour day, used both for departure
/// selection and arrival inference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    #[serde(rename = "Early Morning")]
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    #[serde(rename = "Late Night")]
    LateNight,
}

impl TimeBucket {
    /// Classify an hour-of-day into its bucket.
    ///
    /// Total over 0..=23; callers normalize anything else (mod 24) first.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=8 => TimeBucket::EarlyMorning,
            9..=12 => TimeBucket::Morning,
            13..=16 => TimeBucket::Afternoon,
            17..=20 => TimeBucket::Evening,
            21..=23 => TimeBucket::Night,
            _ => TimeBucket::LateNight,
        }
    }

    /// Representative departure hour for each bucket, as trained.
    pub fn representative_hour(&self) -> u32 {
        match self {
            TimeBucket::EarlyMorning => 6,
            TimeBucket::Morning => 10,
            TimeBucket::Afternoon => 14,
            TimeBucket::Evening => 18,
            TimeBucket::Night => 22,
            TimeBucket::LateNight => 23,
        }
    }

    /// Label exactly as it appears in the training data
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBucket::EarlyMorning => "Early Morning",
            TimeBucket::Morning => "Morning",
            TimeBucket::Afternoon => "Afternoon",
            TimeBucket::Evening => "Evening",
            TimeBucket::Night => "Night",
            TimeBucket::LateNight => "Late Night",
        }
    }
}

/// Split a fractional-hour duration into whole hours and minutes.
///
/// Minutes are rounded to nearest; a rounded 60 carries into the hour so
/// no caller ever sees "60 minutes".
pub fn split_duration(hours: f64) -> (u32, u32) {
    let whole = hours.trunc() as u32;
    let mut mins = ((hours - hours.trunc()) * 60.0).round() as u32;
    let mut hrs = whole;
    if mins == 60 {
        hrs += 1;
        mins = 0;
    }
    (hrs, mins)
}

/// Arrival inferred from a departure bucket and a flight duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalEstimate {
    pub bucket: TimeBucket,
    pub hour: u32,
    pub minute: u32,
}

impl ArrivalEstimate {
    /// Representative clock time, e.g. "12:00"
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Roll the departure bucket's representative hour forward by the flight
/// duration and classify where it lands.
pub fn arrival_estimate(departure: TimeBucket, duration_hours: f64) -> ArrivalEstimate {
    let (y, m, d) = REFERENCE_DATE;
    let takeoff: NaiveDateTime = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(departure.representative_hour(), 0, 0))
        .expect("reference departure timestamp is valid");

    let arrival = takeoff + Duration::seconds((duration_hours * 3600.0).round() as i64);

    ArrivalEstimate {
        bucket: TimeBucket::for_hour(arrival.hour()),
        hour: arrival.hour(),
        minute: arrival.minute(),
    }
}
