use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::state::AppState,
    domain::{CreateMemberRequest, Member},
    error::{AppError, Result},
    search,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter over name, email, skill level,
    /// and notes.
    #[serde(default)]
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    members: Vec<Member>,
    total: usize,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>> {
    let snapshot = state.service_context.snapshot().await;
    let total = snapshot.members.len();

    let members = match params.q.as_deref() {
        Some(q) if !q.is_empty() => search::filter_members(&snapshot.members, q)
            .into_iter()
            .cloned()
            .collect(),
        _ => snapshot.members,
    };

    Ok(Json(ListResponse { members, total }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Member>> {
    let member = state
        .service_context
        .member_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    Ok(Json(member))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Member>)> {
    let member = state.service_context.member_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(member): Json<Member>,
) -> Result<Json<Member>> {
    let member = state.service_context.member_service.update(&id, member).await?;

    Ok(Json(member))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.member_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
