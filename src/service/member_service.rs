use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    changes::{Change, ChangeHub, Collection},
    domain::{CreateMemberRequest, Member, Snapshot},
    error::Result,
    repository::MemberRepository,
};

pub struct MemberService {
    repo: Arc<dyn MemberRepository>,
    hub: Arc<ChangeHub>,
    snapshot: Arc<RwLock<Snapshot>>,
}

impl MemberService {
    pub fn new(
        repo: Arc<dyn MemberRepository>,
        hub: Arc<ChangeHub>,
        snapshot: Arc<RwLock<Snapshot>>,
    ) -> Self {
        Self { repo, hub, snapshot }
    }

    pub async fn create(&self, request: CreateMemberRequest) -> Result<Member> {
        let member = self.repo.create(request).await?;

        self.snapshot.write().await.members.push(member.clone());
        self.hub
            .publish(Change::created(Collection::Members, &member.id, &member));

        Ok(member)
    }

    pub async fn update(&self, id: &str, member: Member) -> Result<Member> {
        let updated = self.repo.update(id, member).await?;

        let mut snapshot = self.snapshot.write().await;
        if let Some(existing) = snapshot.members.iter_mut().find(|m| m.id == id) {
            *existing = updated.clone();
        }
        drop(snapshot);

        self.hub
            .publish(Change::updated(Collection::Members, id, &updated));

        Ok(updated)
    }

    /// Deleting a member does not touch events that roster them; their
    /// participant entries keep the now-dangling id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await?;

        self.snapshot.write().await.members.retain(|m| m.id != id);
        self.hub.publish(Change::deleted(Collection::Members, id));

        Ok(())
    }
}
