use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use farelens_core::features::FeatureRecord;
use farelens_core::timeband::{arrival_estimate, split_duration, TimeBucket};
use farelens_core::trip::{Airline, FareClass, StopCount, TripInput};

use crate::currency::format_rupees;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/quotes", post(create_quote))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
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

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub itinerary: ItinerarySummary,
    /// Present on success; withheld when the model rejects the request.
    pub quote: Option<TicketQuote>,
    /// Non-fatal conditions, e.g. an unknown route priced with the
    /// default duration.
    pub warnings: Vec<String>,
    /// Human-readable prediction failure, if any.
    pub error: Option<String>,
}

/// Route and timing information, returned whether or not pricing
/// succeeded.
#[derive(Debug, Serialize)]
pub struct ItinerarySummary {
    pub source_city: String,
    pub destination_city: String,
    pub duration_hours: f64,
    pub duration_display: String,
    pub days_left: i64,
    pub departure_time: TimeBucket,
    pub arrival_time: TimeBucket,
    pub arrival_clock: String,
}

#[derive(Debug, Serialize)]
pub struct TicketQuote {
    pub base_price: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub ticket_price: f64,
    pub total_price: f64,
    pub passengers: u32,
    pub cgst_display: String,
    pub sgst_display: String,
    pub ticket_price_display: String,
    pub total_price_display: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/quotes
/// Price a trip with the trained model
pub async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    // 1. Validate the inputs the form contract promises us
    if !(1..=9).contains(&req.passengers) {
        return Err(AppError::ValidationError(
            "passengers must be between 1 and 9".to_string(),
        ));
    }
    if req.flight_date <= req.booking_date {
        return Err(AppError::ValidationError(
            "flight date must be strictly after the booking date".to_string(),
        ));
    }

    let trip = TripInput {
        source_city: req.source_city,
        destination_city: req.destination_city,
        airline: req.airline,
        stops: req.stops,
        price_class: req.price_class,
        booking_date: req.booking_date,
        flight_date: req.flight_date,
        departure_time: req.departure_time,
        passengers: req.passengers,
    };

    // 2. Resolve duration; an unknown pair degrades to the default
    let mut warnings = Vec::new();
    let resolved = state
        .ctx
        .routes
        .duration_for(&trip.source_city, &trip.destination_city);
    if resolved.fallback {
        tracing::warn!(
            source = %trip.source_city,
            destination = %trip.destination_city,
            "route not found, using default duration"
        );
        warnings.push(format!(
            "Route not found. Using default duration of {} hr.",
            resolved.hours
        ));
    }

    // 3. Assemble the feature record
    let features = FeatureRecord::assemble(&trip, resolved.hours);

    // 4. Itinerary summary is built regardless of pricing outcome
    let (hrs, mins) = split_duration(resolved.hours);
    let arrival = arrival_estimate(trip.departure_time, resolved.hours);
    let itinerary = ItinerarySummary {
        source_city: trip.source_city.clone(),
        destination_city: trip.destination_city.clone(),
        duration_hours: resolved.hours,
        duration_display: format!("{} hrs {} mins", hrs, mins),
        days_left: features.days_left,
        departure_time: trip.departure_time,
        arrival_time: arrival.bucket,
        arrival_clock: arrival.clock(),
    };

    // 5. Predict and tax; a model rejection withholds only the quote
    let (quote, error) = match state.ctx.engine.quote(&features, trip.passengers) {
        Ok(price_quote) => {
            tracing::info!(
                total = price_quote.total_price,
                passengers = trip.passengers,
                "quote produced"
            );
            let quote = TicketQuote {
                base_price: price_quote.base_price,
                cgst: price_quote.cgst,
                sgst: price_quote.sgst,
                ticket_price: price_quote.ticket_price,
                total_price: price_quote.total_price,
                passengers: price_quote.passengers,
                cgst_display: format_rupees(price_quote.cgst),
                sgst_display: format_rupees(price_quote.sgst),
                ticket_price_display: format_rupees(price_quote.ticket_price),
                total_price_display: format_rupees(price_quote.total_price),
            };
            (Some(quote), None)
        }
        Err(e) => {
            tracing::warn!(error = %e, "prediction failed");
            (None, Some(format!("Prediction failed: {}", e)))
        }
    };

    Ok(Json(QuoteResponse {
        quote_id: Uuid::new_v4(),
        itinerary,
        quote,
        warnings,
        error,
    }))
}
