use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt;

use rallybook::{
    api,
    changes::ChangeHub,
    config::Settings,
    repository::{EventRepository, MemberRepository, SqliteEventRepository, SqliteMemberRepository},
    service::ServiceContext,
};

async fn test_app() -> anyhow::Result<Router> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let member_repo: Arc<dyn MemberRepository> = Arc::new(SqliteMemberRepository::new(pool.clone()));
    let event_repo: Arc<dyn EventRepository> = Arc::new(SqliteEventRepository::new(pool));
    let service_context = Arc::new(ServiceContext::new(
        member_repo,
        event_repo,
        Arc::new(ChangeHub::default()),
    ));
    service_context.load().await?;

    Ok(api::create_app(service_context, Arc::new(Settings::default())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(v) => builder.body(Body::from(v.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn john_smith() -> Value {
    json!({
        "name": "John Smith",
        "email": "john@email.com",
        "phone": "555-0101",
        "skill_level": "3.5",
        "payment_handle": "@johnsmith",
        "notes": "Prefers morning games.",
        "joined_on": "2025-01-15",
        "status": "active"
    })
}

#[tokio::test]
async fn test_member_api_crud() -> anyhow::Result<()> {
    let app = test_app().await?;

    let (status, created) = send(&app, "POST", "/api/members", Some(john_smith())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "John Smith");
    assert_eq!(created["skill_level"], "3.5");

    // Case-insensitive substring search over the list
    let (status, listed) = send(&app, "GET", "/api/members?q=JOHN", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["members"].as_array().unwrap().len(), 1);
    assert_eq!(listed["total"], 1);

    let (_, listed) = send(&app, "GET", "/api/members?q=nobody", None).await;
    assert!(listed["members"].as_array().unwrap().is_empty());

    // Full-record update
    let mut edited = created.clone();
    edited["skill_level"] = json!("4.0");
    let (status, updated) = send(&app, "PUT", &format!("/api/members/{}", id), Some(edited)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["skill_level"], "4.0");

    let (status, fetched) = send(&app, "GET", &format!("/api/members/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["skill_level"], "4.0");

    let (status, _) = send(&app, "DELETE", &format!("/api/members/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/members/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_payment_status_shortcut_and_dashboard() -> anyhow::Result<()> {
    let app = test_app().await?;

    let (_, member) = send(&app, "POST", "/api/members", Some(john_smith())).await;
    let member_id = member["id"].as_str().unwrap().to_string();

    // Far-future date so the event always counts as upcoming
    let tournament = json!({
        "name": "Spring Championship",
        "location": "Central Park Courts",
        "division": "4.0",
        "fee_cents": 5000,
        "status": "registered",
        "kind": "tournament",
        "date": "2999-06-15",
        "time": "9:00 AM",
        "participants": [
            {
                "member_id": member_id,
                "role": "Player 1",
                "amount_owed_cents": 5000,
                "payment_status": "pending",
                "paid_on": null
            },
            {
                "member_id": "ghost",
                "role": "Player 2",
                "amount_owed_cents": 8000,
                "payment_status": "pending",
                "paid_on": null
            }
        ]
    });
    let (status, event) = send(&app, "POST", "/api/tournaments", Some(tournament)).await;
    assert_eq!(status, StatusCode::CREATED);
    let event_id = event["id"].as_str().unwrap().to_string();

    let (status, dashboard) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["active_events"], 1);
    assert_eq!(dashboard["member_count"], 1);
    assert_eq!(dashboard["total_pending_cents"], 13000);
    assert_eq!(dashboard["upcoming"].as_array().unwrap().len(), 1);
    let pending = dashboard["pending_payments"].as_array().unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0]["member_name"], "John Smith");
    // Roster entry pointing at a member that never existed
    assert_eq!(pending[1]["member_name"], "Unknown");

    // Marking a pending entry paid stamps today and leaves the amount alone
    let (status, updated) = send(
        &app,
        "POST",
        &format!("/api/tournaments/{}/participants/0/payment-status", event_id),
        Some(json!({"status": "paid_direct"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entry = &updated["participants"][0];
    assert_eq!(entry["payment_status"], "paid_direct");
    assert_eq!(entry["amount_owed_cents"], 5000);
    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(entry["paid_on"], today.as_str());

    let (_, totals) = send(&app, "GET", "/api/payments/totals", None).await;
    assert_eq!(totals["paid_cents"], 5000);
    assert_eq!(totals["pending_cents"], 8000);
    assert_eq!(totals["overdue_cents"], 0);

    // Out-of-range roster index
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/tournaments/{}/participants/9/payment-status", event_id),
        Some(json!({"status": "overdue"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Deleting the member leaves the event intact; its entry now displays
    // as Unknown
    let (status, _) = send(&app, "DELETE", &format!("/api/members/{}", member_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, dashboard) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(dashboard["active_events"], 1);
    assert_eq!(dashboard["pending_payments"][0]["member_name"], "Unknown");

    Ok(())
}

#[tokio::test]
async fn test_results_screen_and_completed_filtering() -> anyhow::Result<()> {
    let app = test_app().await?;

    let completed = json!({
        "name": "Winter Open",
        "location": "Riverside Courts",
        "division": "3.5",
        "fee_cents": 4000,
        "status": "completed",
        "kind": "tournament",
        "date": "2025-01-10",
        "time": "",
        "result": {
            "final_placing": "1st Place",
            "completed_on": "2025-01-11",
            "notes": "Swept the bracket."
        },
        "participants": []
    });
    let (status, _) = send(&app, "POST", "/api/tournaments", Some(completed)).await;
    assert_eq!(status, StatusCode::CREATED);

    // Completed events are hidden from the active list by default
    let (_, listed) = send(&app, "GET", "/api/tournaments", None).await;
    assert!(listed["events"].as_array().unwrap().is_empty());
    let (_, listed) = send(&app, "GET", "/api/tournaments?include_completed=true", None).await;
    assert_eq!(listed["events"].as_array().unwrap().len(), 1);

    let (status, results) = send(&app, "GET", "/api/results", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results["stats"]["total_completed"], 1);
    assert_eq!(results["stats"]["first_places"], 1);
    assert_eq!(results["stats"]["top_three"], 1);
    assert_eq!(results["results"][0]["name"], "Winter Open");

    // Results search matches the free-text placing
    let (_, results) = send(&app, "GET", "/api/results?q=1st", None).await;
    assert_eq!(results["results"].as_array().unwrap().len(), 1);
    let (_, results) = send(&app, "GET", "/api/results?q=semifinal", None).await;
    assert!(results["results"].as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_kind_mismatch_is_rejected() -> anyhow::Result<()> {
    let app = test_app().await?;

    // A tournament-shaped record does not belong in the leagues collection
    let tournament = json!({
        "name": "Misfiled",
        "location": "Anywhere",
        "fee_cents": 0,
        "status": "interested",
        "kind": "tournament",
        "date": "2025-09-01",
        "participants": []
    });
    let (status, body) = send(&app, "POST", "/api/leagues", Some(tournament)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("league"));

    Ok(())
}
