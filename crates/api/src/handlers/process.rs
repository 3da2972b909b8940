//! Handlers for the `/processes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gridform_core::error::CoreError;
use gridform_core::process::validate_process_name;
use gridform_core::types::DbId;
use gridform_db::models::process::{CreateProcess, ProcessDetail, ProcessSummary, UpdateProcess};
use gridform_db::repositories::ProcessRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{DeleteParams, FetchParams, ListParams};
use crate::state::AppState;

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: DbId,
}

/// POST /processes/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProcess>,
) -> AppResult<(StatusCode, Json<ProcessDetail>)> {
    validate_process_name(&input.process_name)?;
    let process = ProcessRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(process.into())))
}

/// GET /processes/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ProcessSummary>>> {
    let active_only = params.active_only.unwrap_or(true);
    let summaries = ProcessRepo::list(&state.pool, active_only, params.limit, params.skip).await?;
    Ok(Json(summaries))
}

/// GET /processes/fetch
///
/// Direct lookup by id or name; soft-deleted rows are still returned.
pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> AppResult<Json<ProcessDetail>> {
    let row = if let Some(id) = params.process_id {
        ProcessRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Process",
                id,
            }))?
    } else if let Some(name) = params.process_name.as_deref() {
        ProcessRepo::find_by_name(&state.pool, name)
            .await?
            .ok_or_else(|| AppError::NotFound("Process not found".to_string()))?
    } else {
        return Err(AppError::BadRequest(
            "Provide process_id or process_name".to_string(),
        ));
    };
    Ok(Json(row.into()))
}

/// PUT /processes/{process_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProcess>,
) -> AppResult<Json<ProcessDetail>> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }
    if let Some(name) = input.process_name.as_deref() {
        validate_process_name(name)?;
    }
    let process = ProcessRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Process",
            id,
        }))?;
    Ok(Json(process.into()))
}

/// DELETE /processes/{process_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<Json<DeleteConfirmation>> {
    let soft = params.soft_delete.unwrap_or(true);
    let deleted = if soft {
        ProcessRepo::soft_delete(&state.pool, id).await?
    } else {
        ProcessRepo::hard_delete(&state.pool, id).await?
    };
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Process",
            id,
        }));
    }

    let action = if soft { "deactivated" } else { "deleted" };
    Ok(Json(DeleteConfirmation {
        message: format!("Process {action} successfully"),
        id,
    }))
}

/// GET /processes/search/{search_term}
pub async fn search(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> AppResult<Json<Vec<ProcessSummary>>> {
    let summaries = ProcessRepo::search(&state.pool, &term).await?;
    Ok(Json(summaries))
}
