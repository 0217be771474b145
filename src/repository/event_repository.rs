use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::{CreateEventRequest, Event, EventKind},
    error::{AppError, Result},
    repository::EventRepository,
};

#[derive(FromRow)]
struct DocRow {
    doc: String,
}

pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Tournaments and leagues live in separate collections keyed by kind.
    fn table(kind: EventKind) -> &'static str {
        match kind {
            EventKind::Tournament => "tournaments",
            EventKind::League => "leagues",
        }
    }

    fn row_to_event(row: DocRow) -> Result<Event> {
        serde_json::from_str(&row.doc).map_err(Into::into)
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let kind = request.kind();
        let id = Uuid::new_v4().to_string();
        let event = request.into_event(id);
        let doc = serde_json::to_string(&event)?;

        let sql = format!("INSERT INTO {} (id, doc) VALUES (?, ?)", Self::table(kind));
        sqlx::query(&sql)
            .bind(&event.id)
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(event)
    }

    async fn find_by_id(&self, kind: EventKind, id: &str) -> Result<Option<Event>> {
        let sql = format!("SELECT doc FROM {} WHERE id = ?", Self::table(kind));
        let row = sqlx::query_as::<_, DocRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_event(r)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, kind: EventKind) -> Result<Vec<Event>> {
        let sql = format!("SELECT doc FROM {} ORDER BY rowid", Self::table(kind));
        let rows = sqlx::query_as::<_, DocRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        rows.into_iter().map(Self::row_to_event).collect()
    }

    async fn update(&self, id: &str, mut event: Event) -> Result<Event> {
        event.id = id.to_string();
        let doc = serde_json::to_string(&event)?;

        let sql = format!("UPDATE {} SET doc = ? WHERE id = ?", Self::table(event.kind()));
        let result = sqlx::query(&sql)
            .bind(&doc)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} not found",
                match event.kind() {
                    EventKind::Tournament => "Tournament",
                    EventKind::League => "League",
                }
            )));
        }

        Ok(event)
    }

    async fn delete(&self, kind: EventKind, id: &str) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", Self::table(kind));
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }
}
