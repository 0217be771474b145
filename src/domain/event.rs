use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ParticipantEntry;

/// A tournament or league record. The two kinds share every field except
/// scheduling, which lives in the tagged `Schedule` union so a record can
/// never carry both a single date and a start/end range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Free-text bracket label, e.g. "3.5" or "4.0 Mixed".
    #[serde(default)]
    pub division: String,
    pub fee_cents: i64,
    pub status: EventStatus,
    #[serde(default)]
    pub maps_link: Option<String>,
    #[serde(default)]
    pub info_link: Option<String>,
    #[serde(default)]
    pub notes: String,
    /// Populated once the event is completed.
    #[serde(default)]
    pub result: Option<EventResult>,
    #[serde(flatten)]
    pub schedule: Schedule,
    #[serde(default)]
    pub participants: Vec<ParticipantEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Schedule {
    Tournament {
        date: NaiveDate,
        #[serde(default)]
        time: String,
    },
    League {
        start_date: NaiveDate,
        end_date: NaiveDate,
        #[serde(default)]
        day_of_week: String,
        #[serde(default)]
        time: String,
        /// Member designated to collect payments for the league.
        #[serde(default)]
        coordinator_id: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Tournament,
    League,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Tournament => "tournament",
            EventKind::League => "league",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Interested,
    Registered,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventResult {
    /// Free text, e.g. "1st Place" or "Semifinalist".
    #[serde(default)]
    pub final_placing: String,
    pub completed_on: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self.schedule {
            Schedule::Tournament { .. } => EventKind::Tournament,
            Schedule::League { .. } => EventKind::League,
        }
    }

    /// The date the event sorts and filters by: the tournament date, or the
    /// league start date.
    pub fn primary_date(&self) -> NaiveDate {
        match &self.schedule {
            Schedule::Tournament { date, .. } => *date,
            Schedule::League { start_date, .. } => *start_date,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub division: String,
    pub fee_cents: i64,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub maps_link: Option<String>,
    #[serde(default)]
    pub info_link: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub result: Option<EventResult>,
    #[serde(flatten)]
    pub schedule: Schedule,
    #[serde(default)]
    pub participants: Vec<ParticipantEntry>,
}

impl CreateEventRequest {
    pub fn kind(&self) -> EventKind {
        match self.schedule {
            Schedule::Tournament { .. } => EventKind::Tournament,
            Schedule::League { .. } => EventKind::League,
        }
    }

    /// Materialize the record under a freshly assigned identifier.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            name: self.name,
            location: self.location,
            division: self.division,
            fee_cents: self.fee_cents,
            status: self.status,
            maps_link: self.maps_link,
            info_link: self.info_link,
            notes: self.notes,
            result: self.result,
            schedule: self.schedule,
            participants: self.participants,
        }
    }
}
