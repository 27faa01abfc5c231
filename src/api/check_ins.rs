//! Check-in endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::check_in::CheckIn,
    services::check_ins::IssueOutcome,
};

use super::AuthenticatedUser;

/// Create check-in request. The user is always the authenticated principal;
/// only the venue comes from the client.
#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateCheckInRequest {
    /// Venue ID
    #[validate(range(min = 1, message = "venue_id must be a positive id"))]
    pub venue_id: i32,
}

/// Check-in response
#[derive(Serialize, ToSchema)]
pub struct CheckInResponse {
    /// "issued" or "already_issued_today"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<CheckIn>,
}

/// Issue today's check-in for the authenticated user
///
/// A 409 here is the expected one-per-day outcome, not a failure: clients
/// retrying a dropped request must treat it as success-equivalent.
#[utoipa::path(
    post,
    path = "/check-ins",
    tag = "check_ins",
    security(("bearer_auth" = [])),
    request_body = CreateCheckInRequest,
    responses(
        (status = 201, description = "Check-in issued", body = CheckInResponse),
        (status = 409, description = "Already checked in today", body = CheckInResponse),
        (status = 404, description = "Venue not found or inactive"),
        (status = 401, description = "Missing or invalid credential"),
        (status = 400, description = "Malformed venue_id")
    )
)]
pub async fn create_check_in(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateCheckInRequest>,
) -> AppResult<(StatusCode, Json<CheckInResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match state
        .services
        .check_ins
        .issue(claims.user_id, request.venue_id)
        .await?
    {
        IssueOutcome::Issued(check_in) => Ok((
            StatusCode::CREATED,
            Json(CheckInResponse {
                status: "issued".to_string(),
                check_in: Some(check_in),
            }),
        )),
        IssueOutcome::AlreadyIssuedToday => Ok((
            StatusCode::CONFLICT,
            Json(CheckInResponse {
                status: "already_issued_today".to_string(),
                check_in: None,
            }),
        )),
    }
}

/// Get the authenticated user's check-in history, newest first
#[utoipa::path(
    get,
    path = "/check-ins/me",
    tag = "check_ins",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Check-in history", body = Vec<CheckIn>),
        (status = 401, description = "Missing or invalid credential")
    )
)]
pub async fn list_my_check_ins(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<CheckIn>>> {
    let check_ins = state.services.check_ins.list_for_user(claims.user_id).await?;
    Ok(Json(check_ins))
}
