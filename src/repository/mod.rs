use async_trait::async_trait;

use crate::domain::*;
use crate::error::Result;

pub mod event_repository;
pub mod member_repository;

pub use event_repository::SqliteEventRepository;
pub use member_repository::SqliteMemberRepository;

/// Store contract for the members collection. `create` assigns a fresh
/// unique identifier and returns the stored form; `update` replaces the
/// whole record.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, request: CreateMemberRequest) -> Result<Member>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Member>>;
    async fn list(&self) -> Result<Vec<Member>>;
    async fn update(&self, id: &str, member: Member) -> Result<Member>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Store contract for the tournaments and leagues collections. The kind
/// selects which collection an operation touches; `update` derives it from
/// the record's own schedule.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, request: CreateEventRequest) -> Result<Event>;
    async fn find_by_id(&self, kind: EventKind, id: &str) -> Result<Option<Event>>;
    async fn list(&self, kind: EventKind) -> Result<Vec<Event>>;
    async fn update(&self, id: &str, event: Event) -> Result<Event>;
    async fn delete(&self, kind: EventKind, id: &str) -> Result<()>;
}
