use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    api::state::AppState,
    dashboard::{self, PaymentTotals, PendingPayment, ResultsStats},
    domain::Event,
    error::Result,
    search,
};

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub active_events: usize,
    pub completed_events: usize,
    pub member_count: usize,
    pub upcoming: Vec<Event>,
    pub pending_payments: Vec<PendingPayment>,
    pub total_pending_cents: i64,
}

pub async fn summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>> {
    let snapshot = state.service_context.snapshot().await;
    let today = Utc::now().date_naive();

    let counts = dashboard::event_counts(&snapshot);
    let upcoming = dashboard::upcoming_events(&snapshot, today)
        .into_iter()
        .cloned()
        .collect();
    let pending = dashboard::pending_payments(&snapshot);
    let total_pending_cents = dashboard::pending_total_cents(&pending);

    Ok(Json(DashboardSummary {
        active_events: counts.active,
        completed_events: counts.completed,
        member_count: snapshot.members.len(),
        upcoming,
        pending_payments: pending,
        total_pending_cents,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ResultsParams {
    /// Case-insensitive substring filter over name, location, and final
    /// placing.
    #[serde(default)]
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub stats: ResultsStats,
    pub results: Vec<Event>,
    pub total: usize,
}

pub async fn results(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> Result<Json<ResultsResponse>> {
    let snapshot = state.service_context.snapshot().await;

    let stats = dashboard::results_stats(&snapshot);
    let completed = dashboard::completed_events(&snapshot);
    let total = completed.len();

    let results: Vec<Event> = match params.q.as_deref() {
        Some(q) if !q.is_empty() => search::filter_results(&completed, q)
            .into_iter()
            .cloned()
            .collect(),
        _ => completed.into_iter().cloned().collect(),
    };

    Ok(Json(ResultsResponse { stats, results, total }))
}

pub async fn payment_totals(State(state): State<AppState>) -> Result<Json<PaymentTotals>> {
    let snapshot = state.service_context.snapshot().await;

    Ok(Json(dashboard::payment_totals(&snapshot)))
}
