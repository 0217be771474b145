pub mod event_service;
pub mod member_service;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::changes::ChangeHub;
use crate::domain::{EventKind, Snapshot};
use crate::error::Result;
use crate::repository::{EventRepository, MemberRepository};

pub use event_service::EventService;
pub use member_service::MemberService;

/// Owns the in-memory snapshot and the services that mutate it. All state
/// changes flow through here: persist to the store first, then (only on
/// success) update the snapshot and publish the change.
pub struct ServiceContext {
    pub member_repo: Arc<dyn MemberRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub hub: Arc<ChangeHub>,
    pub member_service: MemberService,
    pub event_service: EventService,
    snapshot: Arc<RwLock<Snapshot>>,
}

impl ServiceContext {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        event_repo: Arc<dyn EventRepository>,
        hub: Arc<ChangeHub>,
    ) -> Self {
        let snapshot = Arc::new(RwLock::new(Snapshot::default()));

        let member_service =
            MemberService::new(member_repo.clone(), hub.clone(), snapshot.clone());
        let event_service = EventService::new(event_repo.clone(), hub.clone(), snapshot.clone());

        Self {
            member_repo,
            event_repo,
            hub,
            member_service,
            event_service,
            snapshot,
        }
    }

    /// Re-fetch all three collections from the store.
    pub async fn load(&self) -> Result<()> {
        let members = self.member_repo.list().await?;
        let tournaments = self.event_repo.list(EventKind::Tournament).await?;
        let leagues = self.event_repo.list(EventKind::League).await?;

        tracing::debug!(
            "Loaded {} members, {} tournaments, {} leagues",
            members.len(),
            tournaments.len(),
            leagues.len()
        );

        let mut snapshot = self.snapshot.write().await;
        snapshot.members = members;
        snapshot.tournaments = tournaments;
        snapshot.leagues = leagues;
        Ok(())
    }

    /// A copy of the current in-memory state, for aggregation and search.
    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }
}
