use super::state::AppState;
use crate::error::MeetingError;
use crate::model::{Meeting, MeetingFilter, MeetingQuery, NewMeeting, ObjectId};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateMeetingResponse {
    pub result: Meeting,
}

#[derive(Debug, Serialize)]
pub struct DeleteMeetingResponse {
    pub message: String,
    pub result: Meeting,
}

#[derive(Debug, Serialize)]
pub struct DeleteManyResponse {
    pub message: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Underlying cause, present for store and body errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

const VIEW_NOT_FOUND: &str = "No data found for this meeting.";
const DELETE_NOT_FOUND: &str = "Meeting not found or already deleted.";
const NOTHING_TO_DELETE: &str = "No meetings found to delete.";

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/meeting/
/// List enriched meetings, optionally filtered by `createdBy` or `_id`
pub async fn list_meetings(
    State(state): State<AppState>,
    query: Result<Query<MeetingQuery>, QueryRejection>,
) -> Response {
    let filter = match parse_filter(query, "Failed to fetch meetings") {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    match state.meetings.list(&filter).await {
        Ok(meetings) => (StatusCode::OK, Json(meetings)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/meeting/view/:id
/// Get one enriched meeting
pub async fn view_meeting(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match state.meetings.view(id).await {
        Ok(meeting) => (StatusCode::OK, Json(meeting)).into_response(),
        Err(e) => lookup_error_response(e, VIEW_NOT_FOUND),
    }
}

/// POST /api/meeting/add
/// Create a meeting
pub async fn add_meeting(
    State(state): State<AppState>,
    body: Result<Json<NewMeeting>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected meeting body: {}", rejection.body_text());
            return bad_request("Failed to create meeting", Some(rejection.body_text()));
        }
    };

    match state.meetings.create(input).await {
        Ok(meeting) => {
            (StatusCode::OK, Json(CreateMeetingResponse { result: meeting })).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// DELETE /api/meeting/delete/:id
/// Delete one meeting
pub async fn delete_meeting(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match state.meetings.delete_one(id).await {
        Ok(meeting) => (
            StatusCode::OK,
            Json(DeleteMeetingResponse {
                message: "Meeting deleted successfully".to_string(),
                result: meeting,
            }),
        )
            .into_response(),
        Err(e) => lookup_error_response(e, DELETE_NOT_FOUND),
    }
}

/// POST /api/meeting/deleteMany
/// Delete every meeting matching the query filter
pub async fn delete_many_meetings(
    State(state): State<AppState>,
    query: Result<Query<MeetingQuery>, QueryRejection>,
) -> Response {
    let filter = match parse_filter(query, "Failed to delete meetings") {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    if filter.is_empty() {
        info!("Bulk delete with empty filter matches every meeting");
    }

    match state.meetings.delete_many(&filter).await {
        Ok(count) => (
            StatusCode::OK,
            Json(DeleteManyResponse {
                message: format!("{} meeting(s) deleted successfully", count),
                count,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_id(raw: &str) -> Result<ObjectId, MeetingError> {
    raw.parse().map_err(|_| MeetingError::invalid("id"))
}

fn parse_filter(
    query: Result<Query<MeetingQuery>, QueryRejection>,
    failure: &str,
) -> Result<MeetingFilter, Response> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Rejected meeting filter: {}", rejection.body_text());
        bad_request(failure, Some(rejection.body_text()))
    })?;

    MeetingFilter::try_from(query).map_err(error_response)
}

/// Map an error from a single-meeting lookup, where `NotFound` carries a
/// route-specific message
fn lookup_error_response(err: MeetingError, not_found: &str) -> Response {
    match err {
        MeetingError::NotFound => message_response(StatusCode::NOT_FOUND, not_found),
        other => error_response(other),
    }
}

/// Map a service error to its HTTP response
fn error_response(err: MeetingError) -> Response {
    match err {
        MeetingError::InvalidReference { .. } => bad_request(&err.to_string(), None),
        MeetingError::NotFound => message_response(StatusCode::NOT_FOUND, &err.to_string()),
        MeetingError::NothingToDelete => {
            message_response(StatusCode::NOT_FOUND, NOTHING_TO_DELETE)
        }
        MeetingError::StoreFailure { message, details } => bad_request(message, Some(details)),
    }
}

fn bad_request(error: &str, details: Option<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
        }),
    )
        .into_response()
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}
