use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use farelens_core::features::{FeatureRecord, FeatureValue, FEATURE_COLUMNS};
use farelens_core::pricing::{PredictionError, PricingModel};

use crate::ArtifactError;

/// The serialized regression artifact: an intercept, one coefficient per
/// numeric column, and one weight per observed level of each categorical
/// column. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub numeric: HashMap<String, f64>,
    pub categorical: HashMap<String, HashMap<String, f64>>,
}

impl LinearModel {
    /// Load and schema-check the model from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model: LinearModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate_schema()?;
        tracing::info!(path = %path.display(), "pricing model loaded");
        Ok(model)
    }

    /// Every trained column must be covered by exactly one coefficient
    /// table; anything else means the artifact and this binary disagree
    /// about the input schema, which is a startup abort.
    pub fn validate_schema(&self) -> Result<(), ArtifactError> {
        for column in FEATURE_COLUMNS {
            let is_numeric = self.numeric.contains_key(column);
            let is_categorical = self.categorical.contains_key(column);
            match (is_numeric, is_categorical) {
                (false, false) => {
                    return Err(ArtifactError::SchemaMismatch(format!(
                        "no coefficients for column {:?}",
                        column
                    )));
                }
                (true, true) => {
                    return Err(ArtifactError::SchemaMismatch(format!(
                        "column {:?} is both numeric and categorical",
                        column
                    )));
                }
                _ => {}
            }
        }

        let known = |name: &String| FEATURE_COLUMNS.contains(&name.as_str());
        if let Some(extra) = self
            .numeric
            .keys()
            .chain(self.categorical.keys())
            .find(|name| !known(name))
        {
            return Err(ArtifactError::SchemaMismatch(format!(
                "unknown column {:?} in model artifact",
                extra
            )));
        }

        Ok(())
    }
}

impl PricingModel for LinearModel {
    fn predict(&self, features: &FeatureRecord) -> Result<f64, PredictionError> {
        let mut price = self.intercept;

        for (column, cell) in features.cells() {
            match cell {
                FeatureValue::Number(value) => {
                    let coefficient = self
                        .numeric
                        .get(column)
                        .ok_or(PredictionError::SchemaMismatch { column })?;
                    price += coefficient * value;
                }
                FeatureValue::Text(level) => {
                    let levels = self
                        .categorical
                        .get(column)
                        .ok_or(PredictionError::SchemaMismatch { column })?;
                    let weight =
                        levels
                            .get(&level)
                            .ok_or_else(|| PredictionError::UnseenCategory {
                                column,
                                value: level.clone(),
                            })?;
                    price += weight;
                }
            }
        }

        if !price.is_finite() {
            return Err(PredictionError::NonFinitePrice);
        }

        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use farelens_core::timeband::TimeBucket;
    use farelens_core::trip::{Airline, FareClass, StopCount, TripInput};

    /// A minimal but schema-complete artifact for tests.
    fn toy_model() -> LinearModel {
        let mut numeric = HashMap::new();
        for column in [
            "BOOKING YEAR",
            "BOOKING MONTH",
            "BOOKING DAY",
            "FLIGHT YEAR",
            "FLIGHT MONTH",
            "FLIGHT DAY",
        ] {
            numeric.insert(column.to_string(), 0.0);
        }
        numeric.insert("DAYS LEFT".to_string(), -10.0);
        numeric.insert("DURATION".to_string(), 500.0);

        let mut categorical = HashMap::new();
        categorical.insert(
            "AIRLINE".to_string(),
            HashMap::from([("Vistara".to_string(), 800.0), ("Indigo".to_string(), 200.0)]),
        );
        categorical.insert(
            "SOURCE CITY".to_string(),
            HashMap::from([("Delhi".to_string(), 50.0)]),
        );
        categorical.insert(
            "DESTINATION CITY".to_string(),
            HashMap::from([("Mumbai".to_string(), 70.0)]),
        );
        categorical.insert(
            "STOPS".to_string(),
            HashMap::from([("Zero".to_string(), 0.0), ("One".to_string(), 300.0)]),
        );
        categorical.insert(
            "PRICE CLASS".to_string(),
            HashMap::from([
                ("Economy".to_string(), 0.0),
                ("Business".to_string(), 4000.0),
            ]),
        );
        categorical.insert(
            "DEPARTURE TIME".to_string(),
            HashMap::from([("Morning".to_string(), 30.0)]),
        );
        categorical.insert(
            "ARRIVAL TIME".to_string(),
            HashMap::from([("Morning".to_string(), 20.0)]),
        );

        LinearModel {
            intercept: 1000.0,
            numeric,
            categorical,
        }
    }

    fn sample_features() -> FeatureRecord {
        let trip = TripInput {
            source_city: "Delhi".to_string(),
            destination_city: "Mumbai".to_string(),
            airline: Airline::Vistara,
            stops: StopCount::Zero,
            price_class: FareClass::Economy,
            booking_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            flight_date: NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
            departure_time: TimeBucket::Morning,
            passengers: 1,
        };
        FeatureRecord::assemble(&trip, 2.0)
    }

    #[test]
    fn test_schema_validation_accepts_complete_model() {
        assert!(toy_model().validate_schema().is_ok());
    }

    #[test]
    fn test_schema_validation_rejects_missing_column() {
        let mut model = toy_model();
        model.numeric.remove("DURATION");
        let err = model.validate_schema().unwrap_err();
        assert!(matches!(err, ArtifactError::SchemaMismatch(_)));
        assert!(err.to_string().contains("DURATION"));
    }

    #[test]
    fn test_schema_validation_rejects_double_booked_column() {
        let mut model = toy_model();
        model
            .categorical
            .insert("DURATION".to_string(), HashMap::new());
        assert!(model.validate_schema().is_err());
    }

    #[test]
    fn test_schema_validation_rejects_unknown_column() {
        let mut model = toy_model();
        model.numeric.insert("CABIN TEMP".to_string(), 1.0);
        assert!(model.validate_schema().is_err());
    }

    #[test]
    fn test_predict_sums_weights_and_coefficients() {
        let model = toy_model();
        let features = sample_features();

        // intercept 1000 + Vistara 800 + Delhi 50 + Mumbai 70 + Zero 0
        // + Economy 0 + DAYS LEFT 10 * -10 + DURATION 2 * 500
        // + Morning departure 30 + Morning arrival 20
        let price = model.predict(&features).unwrap();
        assert!((price - 2870.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_rejects_unseen_category() {
        let model = toy_model();
        let mut features = sample_features();
        features.source_city = "Srinagar".to_string();

        let err = model.predict(&features).unwrap_err();
        match err {
            PredictionError::UnseenCategory { column, value } => {
                assert_eq!(column, "SOURCE CITY");
                assert_eq!(value, "Srinagar");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_model_deserializes_from_json() {
        let json = r#"{
            "intercept": 5.0,
            "numeric": {"DURATION": 2.0},
            "categorical": {"AIRLINE": {"Indigo": 1.0}}
        }"#;
        let model: LinearModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.intercept, 5.0);
        assert_eq!(model.numeric["DURATION"], 2.0);
        // Schema validation is a separate step and should fail here.
        assert!(model.validate_schema().is_err());
    }
}
