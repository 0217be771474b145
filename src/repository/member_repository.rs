use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::{CreateMemberRequest, Member},
    error::{AppError, Result},
    repository::MemberRepository,
};

// Database row: the document is stored whole as JSON next to its id.
#[derive(FromRow)]
struct DocRow {
    doc: String,
}

pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_member(row: DocRow) -> Result<Member> {
        serde_json::from_str(&row.doc).map_err(Into::into)
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn create(&self, request: CreateMemberRequest) -> Result<Member> {
        let id = Uuid::new_v4().to_string();
        let member = request.into_member(id);
        let doc = serde_json::to_string(&member)?;

        sqlx::query("INSERT INTO members (id, doc) VALUES (?, ?)")
            .bind(&member.id)
            .bind(&doc)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(member)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Member>> {
        let row = sqlx::query_as::<_, DocRow>("SELECT doc FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_member(r)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query_as::<_, DocRow>("SELECT doc FROM members ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        rows.into_iter().map(Self::row_to_member).collect()
    }

    async fn update(&self, id: &str, mut member: Member) -> Result<Member> {
        member.id = id.to_string();
        let doc = serde_json::to_string(&member)?;

        let result = sqlx::query("UPDATE members SET doc = ? WHERE id = ?")
            .bind(&doc)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".to_string()));
        }

        Ok(member)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        Ok(())
    }
}
