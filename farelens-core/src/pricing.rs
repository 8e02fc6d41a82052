use std::sync::Arc;

use serde::Serialize;

use crate::features::FeatureRecord;
use crate::routes::RouteTable;

/// Central GST component, applied to the base fare.
pub const CGST_RATE: f64 = 0.025;
/// State GST component, applied identically to the base fare.
pub const SGST_RATE: f64 = 0.025;

/// Anything that can turn a feature record into a base fare.
///
/// The trained regression artifact sits behind this single method; any
/// backend can be substituted without touching the rest of the pipeline.
pub trait PricingModel: Send + Sync {
    fn predict(&self, features: &FeatureRecord) -> Result<f64, PredictionError>;
}

/// Request-scoped prediction failures. The process keeps serving; only
/// the quote for the offending request is withheld.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("model has no weight for {column} value {value:?}")]
    UnseenCategory { column: &'static str, value: String },

    #[error("feature {column} does not match the model schema")]
    SchemaMismatch { column: &'static str },

    #[error("model produced a non-finite base price")]
    NonFinitePrice,
}

/// A tax-adjusted price for one prediction. Computed once, displayed,
/// discarded; raw values carry no rounding.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceQuote {
    pub base_price: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub ticket_price: f64,
    pub total_price: f64,
    pub passengers: u32,
}

impl PriceQuote {
    /// Apply both GST components and scale by passenger count.
    pub fn compute(base_price: f64, passengers: u32) -> Self {
        let cgst = base_price * CGST_RATE;
        let sgst = base_price * SGST_RATE;
        let ticket_price = base_price + cgst + sgst;
        let total_price = ticket_price * passengers as f64;

        Self {
            base_price,
            cgst,
            sgst,
            ticket_price,
            total_price,
            passengers,
        }
    }
}

/// Runs the trained model and taxes its output.
pub struct PricingEngine {
    model: Arc<dyn PricingModel>,
}

impl PricingEngine {
    pub fn new(model: Arc<dyn PricingModel>) -> Self {
        Self { model }
    }

    /// Base fare straight from the model; the only fallible core step.
    pub fn predict_base_price(&self, features: &FeatureRecord) -> Result<f64, PredictionError> {
        self.model.predict(features)
    }

    /// Predict and tax in one pass.
    pub fn quote(
        &self,
        features: &FeatureRecord,
        passengers: u32,
    ) -> Result<PriceQuote, PredictionError> {
        let base_price = self.predict_base_price(features)?;
        Ok(PriceQuote::compute(base_price, passengers))
    }
}

/// The process-wide read-only artifacts, bundled so the pipeline takes
/// them explicitly instead of reaching for globals. Safe to share across
/// concurrent requests: nothing here mutates after load.
#[derive(Clone)]
pub struct PredictionContext {
    pub routes: Arc<RouteTable>,
    pub engine: Arc<PricingEngine>,
}

impl PredictionContext {
    pub fn new(routes: Arc<RouteTable>, model: Arc<dyn PricingModel>) -> Self {
        Self {
            routes,
            engine: Arc::new(PricingEngine::new(model)),
        }
    }
}
