use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    api::state::AppState,
    domain::{CreateEventRequest, Event, EventKind, PaymentStatus},
    error::{AppError, Result},
    search,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter over name, location, and
    /// division.
    #[serde(default)]
    q: Option<String>,
    /// Lists show only non-completed events unless this is set; completed
    /// ones live on the results screen.
    #[serde(default)]
    include_completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    events: Vec<Event>,
    total: usize,
}

#[derive(Debug, Deserialize)]
pub struct PaymentStatusUpdate {
    pub status: PaymentStatus,
}

async fn list_events(
    state: AppState,
    kind: EventKind,
    params: ListParams,
) -> Result<Json<ListResponse>> {
    let snapshot = state.service_context.snapshot().await;
    let collection = match kind {
        EventKind::Tournament => &snapshot.tournaments,
        EventKind::League => &snapshot.leagues,
    };

    let visible: Vec<&Event> = collection
        .iter()
        .filter(|e| params.include_completed || !e.is_completed())
        .collect();
    let total = visible.len();

    let events: Vec<Event> = match params.q.as_deref() {
        Some(q) if !q.is_empty() => search::filter_events(&visible, q)
            .into_iter()
            .cloned()
            .collect(),
        _ => visible.into_iter().cloned().collect(),
    };

    Ok(Json(ListResponse { events, total }))
}

async fn get_event(state: AppState, kind: EventKind, id: String) -> Result<Json<Event>> {
    let event = state
        .service_context
        .event_repo
        .find_by_id(kind, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", kind)))?;

    Ok(Json(event))
}

async fn create_event(
    state: AppState,
    kind: EventKind,
    request: CreateEventRequest,
) -> Result<(StatusCode, Json<Event>)> {
    if request.kind() != kind {
        return Err(AppError::BadRequest(format!("Expected a {} record", kind)));
    }

    let event = state.service_context.event_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

async fn update_event(
    state: AppState,
    kind: EventKind,
    id: String,
    event: Event,
) -> Result<Json<Event>> {
    if event.kind() != kind {
        return Err(AppError::BadRequest(format!("Expected a {} record", kind)));
    }

    let event = state.service_context.event_service.update(&id, event).await?;

    Ok(Json(event))
}

async fn delete_event(state: AppState, kind: EventKind, id: String) -> Result<StatusCode> {
    state.service_context.event_service.delete(kind, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn set_payment_status(
    state: AppState,
    kind: EventKind,
    id: String,
    index: usize,
    update: PaymentStatusUpdate,
) -> Result<Json<Event>> {
    let today = Utc::now().date_naive();
    let event = state
        .service_context
        .event_service
        .set_participant_payment_status(kind, &id, index, update.status, today)
        .await?;

    Ok(Json(event))
}

// Tournament routes

pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>> {
    list_events(state, EventKind::Tournament, params).await
}

pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>> {
    get_event(state, EventKind::Tournament, id).await
}

pub async fn create_tournament(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    create_event(state, EventKind::Tournament, request).await
}

pub async fn update_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(event): Json<Event>,
) -> Result<Json<Event>> {
    update_event(state, EventKind::Tournament, id, event).await
}

pub async fn delete_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    delete_event(state, EventKind::Tournament, id).await
}

pub async fn tournament_payment_status(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
    Json(update): Json<PaymentStatusUpdate>,
) -> Result<Json<Event>> {
    set_payment_status(state, EventKind::Tournament, id, index, update).await
}

// League routes

pub async fn list_leagues(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>> {
    list_events(state, EventKind::League, params).await
}

pub async fn get_league(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>> {
    get_event(state, EventKind::League, id).await
}

pub async fn create_league(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    create_event(state, EventKind::League, request).await
}

pub async fn update_league(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(event): Json<Event>,
) -> Result<Json<Event>> {
    update_event(state, EventKind::League, id, event).await
}

pub async fn delete_league(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    delete_event(state, EventKind::League, id).await
}

pub async fn league_payment_status(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
    Json(update): Json<PaymentStatusUpdate>,
) -> Result<Json<Event>> {
    set_payment_status(state, EventKind::League, id, index, update).await
}
