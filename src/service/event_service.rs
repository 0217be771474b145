use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::{
    changes::{Change, ChangeHub, Collection},
    domain::{CreateEventRequest, Event, EventKind, PaymentStatus, Snapshot},
    error::{AppError, Result},
    repository::EventRepository,
};

pub struct EventService {
    repo: Arc<dyn EventRepository>,
    hub: Arc<ChangeHub>,
    snapshot: Arc<RwLock<Snapshot>>,
}

fn collection_mut(snapshot: &mut Snapshot, kind: EventKind) -> &mut Vec<Event> {
    match kind {
        EventKind::Tournament => &mut snapshot.tournaments,
        EventKind::League => &mut snapshot.leagues,
    }
}

impl EventService {
    pub fn new(
        repo: Arc<dyn EventRepository>,
        hub: Arc<ChangeHub>,
        snapshot: Arc<RwLock<Snapshot>>,
    ) -> Self {
        Self { repo, hub, snapshot }
    }

    pub async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let kind = request.kind();
        let event = self.repo.create(request).await?;

        collection_mut(&mut *self.snapshot.write().await, kind).push(event.clone());
        self.hub
            .publish(Change::created(kind.into(), &event.id, &event));

        Ok(event)
    }

    pub async fn update(&self, id: &str, event: Event) -> Result<Event> {
        let kind = event.kind();
        let updated = self.repo.update(id, event).await?;

        let mut snapshot = self.snapshot.write().await;
        let collection = collection_mut(&mut snapshot, kind);
        if let Some(existing) = collection.iter_mut().find(|e| e.id == id) {
            *existing = updated.clone();
        }
        drop(snapshot);

        self.hub.publish(Change::updated(kind.into(), id, &updated));

        Ok(updated)
    }

    pub async fn delete(&self, kind: EventKind, id: &str) -> Result<()> {
        self.repo.delete(kind, id).await?;

        collection_mut(&mut *self.snapshot.write().await, kind).retain(|e| e.id != id);
        self.hub
            .publish(Change::deleted(Collection::from(kind), id));

        Ok(())
    }

    /// Quick payment-status transition for one roster entry. Moving to a
    /// paid status stamps today's date; moving anywhere else clears it.
    /// The amount owed is never touched. Whole-record edits via `update`
    /// remain free-form with no stamped side effects.
    pub async fn set_participant_payment_status(
        &self,
        kind: EventKind,
        event_id: &str,
        index: usize,
        status: PaymentStatus,
        today: NaiveDate,
    ) -> Result<Event> {
        let mut event = self
            .repo
            .find_by_id(kind, event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", kind)))?;

        let entry = event.participants.get_mut(index).ok_or_else(|| {
            AppError::BadRequest(format!("No participant at index {}", index))
        })?;

        entry.payment_status = status;
        entry.paid_on = if status.is_paid() { Some(today) } else { None };

        self.update(event_id, event).await
    }
}
