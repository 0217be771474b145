use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rallybook::{
    api,
    changes::ChangeHub,
    config::Settings,
    repository::{self, EventRepository, MemberRepository},
    sample_data,
    service::ServiceContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rallybook=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!(
        "Starting Rallybook server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    // Initialize database
    let db_pool = SqlitePoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    // Initialize repositories
    let member_repo: Arc<dyn MemberRepository> =
        Arc::new(repository::SqliteMemberRepository::new(db_pool.clone()));
    let event_repo: Arc<dyn EventRepository> =
        Arc::new(repository::SqliteEventRepository::new(db_pool.clone()));

    // Change notification fan-out
    let hub = Arc::new(ChangeHub::default());

    // Create service context and pull the collections into memory
    let service_context = Arc::new(ServiceContext::new(
        member_repo.clone(),
        event_repo.clone(),
        hub,
    ));
    service_context.load().await?;

    // First run against an empty database gets the sample roster
    if settings.database.seed_if_empty && service_context.snapshot().await.is_empty() {
        tracing::info!("All collections empty, loading sample data");
        sample_data::seed(member_repo.as_ref(), event_repo.as_ref()).await?;
        service_context.load().await?;
    }

    let app = api::create_app(service_context, Arc::new(settings.clone()));

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        settings.server.host, settings.server.port
    ))
    .await?;

    tracing::info!(
        "Server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
