//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;

use super::dto::{
    AddBlockRequest, AddBlockResponse, AssignSceneRequest, BoardResponse, CreateDayRequest,
    CreateDayResponse, DropRequest, HealthResponse, ImportScenesRequest, ImportScenesResponse,
    PoolQuery, RemoteChangeRequest, SetStatusRequest, SyncStatusResponse, UpdateDayDateRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BlockId, DayId, Scene, SceneNumber, SceneSummary, ShootingDay};
use crate::engine::{DropOutcome, ScheduledIndex};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match state.service.last_sync_error() {
        None => "ok".to_string(),
        Some(e) => format!("degraded: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

// =============================================================================
// Board & Scenes
// =============================================================================

/// GET /v1/board
///
/// Full board snapshot: every scene record and every shooting day.
pub async fn get_board(State(state): State<AppState>) -> HandlerResult<BoardResponse> {
    Ok(Json(BoardResponse {
        scenes: state.service.scenes(),
        days: state.service.days(),
    }))
}

/// GET /v1/scenes
pub async fn list_scenes(State(state): State<AppState>) -> HandlerResult<Vec<Scene>> {
    Ok(Json(state.service.scenes()))
}

/// POST /v1/scenes/import
///
/// Merge the scene list supplied by the script subsystem.
pub async fn import_scenes(
    State(state): State<AppState>,
    Json(request): Json<ImportScenesRequest>,
) -> HandlerResult<ImportScenesResponse> {
    let imported = request.scenes.len();
    state.service.import_scenes(request.scenes);
    Ok(Json(ImportScenesResponse { imported }))
}

/// GET /v1/pool
///
/// Candidate scenes for manual assignment, filtered by status and location.
pub async fn get_pool(
    State(state): State<AppState>,
    Query(query): Query<PoolQuery>,
) -> HandlerResult<Vec<Scene>> {
    let filter = query.into_filter().map_err(AppError::BadRequest)?;
    Ok(Json(state.service.available_pool(&filter)))
}

/// PUT /v1/scenes/{number}/status
///
/// Manual stripboard flag edit.
pub async fn set_scene_status(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(request): Json<SetStatusRequest>,
) -> HandlerResult<Scene> {
    let number = SceneNumber::new(number);
    state.service.set_scene_status(&number, request.status)?;
    scene_response(&state, &number)
}

/// POST /v1/scenes/{number}/assign
pub async fn assign_scene(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(request): Json<AssignSceneRequest>,
) -> HandlerResult<Scene> {
    let number = SceneNumber::new(number);
    state
        .service
        .assign_scene(&number, request.day_id, request.block_id)?;
    scene_response(&state, &number)
}

/// POST /v1/scenes/{number}/unassign
pub async fn unassign_scene(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> HandlerResult<Scene> {
    let number = SceneNumber::new(number);
    state.service.unassign_scene(&number);
    scene_response(&state, &number)
}

/// POST /v1/scenes/{number}/reset
pub async fn reset_scene(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> HandlerResult<Scene> {
    let number = SceneNumber::new(number);
    state.service.reset_scene(&number);
    scene_response(&state, &number)
}

fn scene_response(state: &AppState, number: &SceneNumber) -> HandlerResult<Scene> {
    state
        .service
        .scene(number)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Scene {} not found", number)))
}

// =============================================================================
// Drag and Drop
// =============================================================================

/// POST /v1/drop
///
/// Dispatch a drag-and-drop gesture. Rejections (locked days, incompatible
/// payloads) come back as an `ignored` outcome, not an error.
pub async fn handle_drop(
    State(state): State<AppState>,
    Json(request): Json<DropRequest>,
) -> HandlerResult<DropOutcome> {
    let outcome = state.service.handle_drop(request.source, request.target)?;
    Ok(Json(outcome))
}

// =============================================================================
// Shooting Days
// =============================================================================

/// GET /v1/days
pub async fn list_days(State(state): State<AppState>) -> HandlerResult<Vec<ShootingDay>> {
    Ok(Json(state.service.days()))
}

/// POST /v1/days
///
/// Append a shooting day after the last scheduled date.
pub async fn create_day(
    State(state): State<AppState>,
    Json(request): Json<CreateDayRequest>,
) -> Result<(StatusCode, Json<CreateDayResponse>), AppError> {
    let (day_id, _) = state.service.add_shooting_day(request.today);
    let day = day_response(&state, day_id)?;
    Ok((StatusCode::CREATED, Json(CreateDayResponse { day: day.0 })))
}

/// PUT /v1/days/{day_id}/date
///
/// Change a day's date. Duplicate dates are rejected with a 409 naming the
/// conflicting day.
pub async fn update_day_date(
    State(state): State<AppState>,
    Path(day_id): Path<DayId>,
    Json(request): Json<UpdateDayDateRequest>,
) -> HandlerResult<ShootingDay> {
    state.service.update_day_date(day_id, request.date)?;
    day_response(&state, day_id)
}

/// POST /v1/days/{day_id}/lock
pub async fn lock_day(
    State(state): State<AppState>,
    Path(day_id): Path<DayId>,
) -> HandlerResult<ShootingDay> {
    state.service.lock_day(day_id)?;
    day_response(&state, day_id)
}

/// POST /v1/days/{day_id}/unlock
pub async fn unlock_day(
    State(state): State<AppState>,
    Path(day_id): Path<DayId>,
) -> HandlerResult<ShootingDay> {
    state.service.unlock_day(day_id)?;
    day_response(&state, day_id)
}

/// POST /v1/days/{day_id}/blocks
pub async fn add_block(
    State(state): State<AppState>,
    Path(day_id): Path<DayId>,
    Json(request): Json<AddBlockRequest>,
) -> Result<(StatusCode, Json<AddBlockResponse>), AppError> {
    let (block_id, _) = state.service.add_block(day_id, request.time, request.after)?;
    let day = day_response(&state, day_id)?;
    Ok((
        StatusCode::CREATED,
        Json(AddBlockResponse {
            block_id,
            day: day.0,
        }),
    ))
}

/// DELETE /v1/days/{day_id}/blocks/{block_id}
pub async fn remove_block(
    State(state): State<AppState>,
    Path((day_id, block_id)): Path<(DayId, BlockId)>,
) -> HandlerResult<ShootingDay> {
    state.service.remove_block(day_id, block_id)?;
    day_response(&state, day_id)
}

fn day_response(state: &AppState, day_id: DayId) -> HandlerResult<ShootingDay> {
    state
        .service
        .day(day_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Shooting day {} not found", day_id)))
}

// =============================================================================
// Scheduled-Date Index
// =============================================================================

/// GET /v1/scheduled
///
/// The whole materialized index, keyed by shoot date.
pub async fn get_scheduled_index(State(state): State<AppState>) -> HandlerResult<ScheduledIndex> {
    Ok(Json(state.service.scheduled_index()))
}

/// GET /v1/scheduled/{date}
///
/// Ordered scene summaries for one shoot date.
pub async fn get_scheduled_scenes(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> HandlerResult<Vec<SceneSummary>> {
    Ok(Json(state.service.scheduled_scenes(date)))
}

/// POST /v1/reconcile
///
/// Rebuild the index from the day collection and return the repaired copy.
pub async fn reconcile(State(state): State<AppState>) -> HandlerResult<ScheduledIndex> {
    state.service.reconcile();
    Ok(Json(state.service.scheduled_index()))
}

// =============================================================================
// Sync
// =============================================================================

/// GET /v1/sync/status
pub async fn get_sync_status(State(state): State<AppState>) -> HandlerResult<SyncStatusResponse> {
    Ok(Json(SyncStatusResponse {
        last_sync_error: state.service.last_sync_error(),
    }))
}

/// POST /v1/sync/remote-change
///
/// Notification that another client changed a persisted table. Reloads are
/// debounced; echoes of our own writes are dropped.
pub async fn notify_remote_change(
    State(state): State<AppState>,
    Json(request): Json<RemoteChangeRequest>,
) -> Result<StatusCode, AppError> {
    state.service.handle_remote_change(request.table);
    Ok(StatusCode::ACCEPTED)
}
