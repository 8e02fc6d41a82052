use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use farelens_core::timeband::split_duration;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/cities", get(list_cities))
        .route("/v1/routes", get(preview_route))
}

#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub sources: Vec<String>,
    pub destinations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Serialize)]
pub struct RoutePreviewResponse {
    pub source_city: String,
    pub destination_city: String,
    pub duration_hours: f64,
    pub duration_display: String,
    /// True when the pair was absent and the default duration applies.
    pub fallback: bool,
    pub warnings: Vec<String>,
}

/// GET /v1/cities
/// City lists for the form's selectors, straight from the route table
pub async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    Json(CitiesResponse {
        sources: state.ctx.routes.source_cities(),
        destinations: state.ctx.routes.destination_cities(),
    })
}

/// GET /v1/routes?source=Delhi&destination=Mumbai
/// Duration preview shown before the user asks for a price
pub async fn preview_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Json<RoutePreviewResponse> {
    let resolved = state
        .ctx
        .routes
        .duration_for(&query.source, &query.destination);

    let mut warnings = Vec::new();
    if resolved.fallback {
        warnings.push(format!(
            "Route not found. Using default duration of {} hr.",
            resolved.hours
        ));
    }

    let (hrs, mins) = split_duration(resolved.hours);
    Json(RoutePreviewResponse {
        source_city: query.source,
        destination_city: query.destination,
        duration_hours: resolved.hours,
        duration_display: format!("{} hrs {} mins", hrs, mins),
        fallback: resolved.fallback,
        warnings,
    })
}
