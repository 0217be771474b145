use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Free-text rating string, e.g. "3.5" or "4.0".
    #[serde(default)]
    pub skill_level: String,
    /// Peer-payment username, e.g. "@johnsmith".
    #[serde(default)]
    pub payment_handle: String,
    #[serde(default)]
    pub notes: String,
    pub joined_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skill_level: String,
    #[serde(default)]
    pub payment_handle: String,
    #[serde(default)]
    pub notes: String,
    pub joined_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: MemberStatus,
}

impl CreateMemberRequest {
    /// Materialize the record under a freshly assigned identifier.
    pub fn into_member(self, id: String) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            skill_level: self.skill_level,
            payment_handle: self.payment_handle,
            notes: self.notes,
            joined_on: self.joined_on,
            status: self.status,
        }
    }
}
