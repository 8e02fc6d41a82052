use serde::Serialize;

use crate::timeband::{arrival_estimate, TimeBucket};
use crate::trip::{Airline, FareClass, StopCount, TripInput};

/// Column names in the exact order the pricing model was trained against.
///
/// This array is a contract with the serialized model artifact: renaming
/// or reordering anything here silently corrupts predictions.
pub const FEATURE_COLUMNS: [&str; 15] = [
    "AIRLINE",
    "SOURCE CITY",
    "STOPS",
    "DESTINATION CITY",
    "PRICE CLASS",
    "BOOKING YEAR",
    "BOOKING MONTH",
    "BOOKING DAY",
    "DAYS LEFT",
    "FLIGHT YEAR",
    "FLIGHT MONTH",
    "FLIGHT DAY",
    "DEPARTURE TIME",
    "DURATION",
    "ARRIVAL TIME",
];

/// A single cell of the feature record as the model consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Text(String),
    Number(f64),
}

impl FeatureValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s),
            FeatureValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            FeatureValue::Text(_) => None,
        }
    }
}

/// The fifteen-field input row handed to the pricing model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub airline: Airline,
    pub source_city: String,
    pub stops: StopCount,
    pub destination_city: String,
    pub price_class: FareClass,
    pub booking_year: i32,
    pub booking_month: u32,
    pub booking_day: u32,
    pub days_left: i64,
    pub flight_year: i32,
    pub flight_month: u32,
    pub flight_day: u32,
    pub departure_time: TimeBucket,
    pub duration_hours: f64,
    pub arrival_time: TimeBucket,
}

impl FeatureRecord {
    /// Derive the full feature row from a trip and its resolved duration.
    ///
    /// DAYS LEFT is the exact calendar-day difference; the upstream date
    /// constraint keeps it >= 1, but a violated constraint still yields
    /// the faithful arithmetic difference rather than a panic.
    pub fn assemble(trip: &TripInput, duration_hours: f64) -> Self {
        use chrono::Datelike;

        let days_left = trip
            .flight_date
            .signed_duration_since(trip.booking_date)
            .num_days();

        let arrival = arrival_estimate(trip.departure_time, duration_hours);

        Self {
            airline: trip.airline,
            source_city: trip.source_city.clone(),
            stops: trip.stops,
            destination_city: trip.destination_city.clone(),
            price_class: trip.price_class,
            booking_year: trip.booking_date.year(),
            booking_month: trip.booking_date.month(),
            booking_day: trip.booking_date.day(),
            days_left,
            flight_year: trip.flight_date.year(),
            flight_month: trip.flight_date.month(),
            flight_day: trip.flight_date.day(),
            departure_time: trip.departure_time,
            duration_hours,
            arrival_time: arrival.bucket,
        }
    }

    /// Cells in the same order as [`FEATURE_COLUMNS`].
    pub fn values(&self) -> [FeatureValue; 15] {
        [
            FeatureValue::Text(self.airline.as_str().to_string()),
            FeatureValue::Text(self.source_city.clone()),
            FeatureValue::Text(self.stops.as_str().to_string()),
            FeatureValue::Text(self.destination_city.clone()),
            FeatureValue::Text(self.price_class.as_str().to_string()),
            FeatureValue::Number(self.booking_year as f64),
            FeatureValue::Number(self.booking_month as f64),
            FeatureValue::Number(self.booking_day as f64),
            FeatureValue::Number(self.days_left as f64),
            FeatureValue::Number(self.flight_year as f64),
            FeatureValue::Number(self.flight_month as f64),
            FeatureValue::Number(self.flight_day as f64),
            FeatureValue::Text(self.departure_time.as_str().to_string()),
            FeatureValue::Number(self.duration_hours),
            FeatureValue::Text(self.arrival_time.as_str().to_string()),
        ]
    }

    /// (column, cell) pairs in trained order.
    pub fn cells(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> {
        FEATURE_COLUMNS.into_iter().zip(self.values())
    }
}
