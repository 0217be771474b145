use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A roster line on an event. Holds a weak reference to a member by id;
/// the member may be deleted independently, in which case display falls
/// back to "Unknown". The amount owed is a snapshot taken when the entry
/// was added, never re-synced from the member record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantEntry {
    pub member_id: String,
    #[serde(default)]
    pub role: String,
    pub amount_owed_cents: i64,
    pub payment_status: PaymentStatus,
    pub paid_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    PaidDirect,
    PaidCoordinator,
    Overdue,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::PaidDirect | PaymentStatus::PaidCoordinator)
    }
}
