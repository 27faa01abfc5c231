//! Venue endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::venue::{Venue, VenueWithCount},
};

/// List active venues ranked by today's check-in count
#[utoipa::path(
    get,
    path = "/venues/ranked",
    tag = "venues",
    responses(
        (status = 200, description = "Venues with today's counts, most popular first", body = Vec<VenueWithCount>),
        (status = 500, description = "Internal error")
    )
)]
pub async fn list_ranked(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<VenueWithCount>>> {
    let ranked = state.services.venues.list_ranked().await?;
    Ok(Json(ranked))
}

/// Get an active venue by id
#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "venues",
    params(
        ("id" = i32, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue details", body = Venue),
        (status = 404, description = "Venue not found or inactive")
    )
)]
pub async fn get_venue(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Venue>> {
    let venue = state.services.venues.get_active(id).await?;
    Ok(Json(venue))
}
