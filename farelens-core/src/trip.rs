use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeband::TimeBucket;

/// Carriers the pricing model was trained on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Airline {
    SpiceJet,
    AirAsia,
    Vistara,
    #[serde(rename = "GO FIRST")]
    GoFirst,
    Indigo,
    #[serde(rename = "Air India")]
    AirIndia,
}

impl Airline {
    /// Label exactly as it appears in the training data
    pub fn as_str(&self) -> &'static str {
        match self {
            Airline::SpiceJet => "SpiceJet",
            Airline::AirAsia => "AirAsia",
            Airline::Vistara => "Vistara",
            Airline::GoFirst => "GO FIRST",
            Airline::Indigo => "Indigo",
            Airline::AirIndia => "Air India",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopCount {
    Zero,
    One,
    #[serde(rename = "Two or More")]
    TwoOrMore,
}

impl StopCount {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopCount::Zero => "Zero",
            StopCount::One => "One",
            StopCount::TwoOrMore => "Two or More",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FareClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    #[serde(rename = "First Class")]
    FirstClass,
    Luxury,
}

impl FareClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FareClass::Economy => "Economy",
            FareClass::PremiumEconomy => "Premium Economy",
            FareClass::Business => "Business",
            FareClass::FirstClass => "First Class",
            FareClass::Luxury => "Luxury",
        }
    }
}

/// One prediction request's worth of user selections.
///
/// Transient by design: rebuilt on every submission, never stored. The
/// presentation layer guarantees `flight_date > booking_date` and
/// `passengers` in 1..=9 before this reaches the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInput {
    pub source_city: String,
    pub destination_city: String,
    pub airline: Airline,
    pub stops: StopCount,
    pub price_class: FareClass,
    pub booking_date: NaiveDate,
    pub flight_date: NaiveDate,
    pub departure_time: TimeBucket,
    pub passengers: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airline_labels_match_training_data() {
        assert_eq!(Airline::GoFirst.as_str(), "GO FIRST");
        assert_eq!(Airline::AirIndia.as_str(), "Air India");
        assert_eq!(Airline::SpiceJet.as_str(), "SpiceJet");
    }

    #[test]
    fn test_enum_wire_names_round_trip() {
        let airline: Airline = serde_json::from_str("\"GO FIRST\"").unwrap();
        assert_eq!(airline, Airline::GoFirst);

        let stops: StopCount = serde_json::from_str("\"Two or More\"").unwrap();
        assert_eq!(stops, StopCount::TwoOrMore);

        let class: FareClass = serde_json::from_str("\"Premium Economy\"").unwrap();
        assert_eq!(class, FareClass::PremiumEconomy);

        assert_eq!(
            serde_json::to_string(&FareClass::FirstClass).unwrap(),
            "\"First Class\""
        );
    }

    #[test]
    fn test_unknown_category_is_rejected_at_deserialization() {
        let result: Result<Airline, _> = serde_json::from_str("\"Jet Airways\"");
        assert!(result.is_err());
    }
}
