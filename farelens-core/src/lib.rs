pub mod features;
pub mod pricing;
pub mod routes;
pub mod timeband;
pub mod trip;

pub use features::FeatureRecord;
pub use pricing::{PredictionContext, PredictionError, PriceQuote, PricingEngine, PricingModel};
pub use routes::{ResolvedDuration, RouteRecord, RouteTable};
pub use timeband::{split_duration, ArrivalEstimate, TimeBucket};
pub use trip::{Airline, FareClass, StopCount, TripInput};
