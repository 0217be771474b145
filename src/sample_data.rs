//! Starter records for an empty database: a small roster, one tournament,
//! and one league, so the dashboard has something to show on first run.

use crate::{
    domain::{
        CreateEventRequest, CreateMemberRequest, EventStatus, MemberStatus, ParticipantEntry,
        PaymentStatus, Schedule,
    },
    error::Result,
    repository::{EventRepository, MemberRepository},
};

pub fn sample_members() -> Vec<CreateMemberRequest> {
    let member = |name: &str, email: &str, phone: &str, skill: &str, handle: &str, notes: &str| {
        CreateMemberRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            skill_level: skill.to_string(),
            payment_handle: handle.to_string(),
            notes: notes.to_string(),
            joined_on: None,
            status: MemberStatus::Active,
        }
    };

    vec![
        member("John Smith", "john@email.com", "555-0101", "3.5", "@johnsmith", "Prefers morning games."),
        member("Sarah Johnson", "sarah@email.com", "555-0102", "4.0", "@sarahj", "Team captain experience."),
        member("Mike Davis", "mike@email.com", "555-0103", "3.0", "@miked", "New to pickleball."),
        member("Lisa Wilson", "lisa@email.com", "555-0104", "4.5", "@lisaw", "Tournament experience."),
    ]
}

fn entry(member_id: &str, role: &str, cents: i64, status: PaymentStatus, paid_on: Option<&str>) -> ParticipantEntry {
    ParticipantEntry {
        member_id: member_id.to_string(),
        role: role.to_string(),
        amount_owed_cents: cents,
        payment_status: status,
        paid_on: paid_on.map(|d| d.parse().expect("valid sample date")),
    }
}

pub fn sample_tournament(roster: &[String]) -> CreateEventRequest {
    CreateEventRequest {
        name: "Spring Championship".to_string(),
        location: "Central Park Courts".to_string(),
        division: "4.0".to_string(),
        fee_cents: 5000,
        status: EventStatus::Registered,
        maps_link: Some("https://maps.google.com/?q=Central+Park+Courts".to_string()),
        info_link: Some("https://example.com/spring-championship".to_string()),
        notes: "Bring sunscreen and water bottles.".to_string(),
        result: None,
        schedule: Schedule::Tournament {
            date: "2025-06-15".parse().expect("valid sample date"),
            time: "9:00 AM".to_string(),
        },
        participants: vec![
            entry(&roster[0], "Player 1", 5000, PaymentStatus::PaidCoordinator, Some("2025-05-20")),
            entry(&roster[1], "Player 2", 5000, PaymentStatus::Pending, None),
        ],
    }
}

pub fn sample_league(roster: &[String]) -> CreateEventRequest {
    CreateEventRequest {
        name: "Summer League 2025".to_string(),
        location: "Recreation Center".to_string(),
        division: "3.5".to_string(),
        fee_cents: 12000,
        status: EventStatus::Active,
        maps_link: Some("https://maps.google.com/?q=Recreation+Center".to_string()),
        info_link: Some("https://example.com/summer-league".to_string()),
        notes: "Indoor courts available in case of rain.".to_string(),
        result: None,
        schedule: Schedule::League {
            start_date: "2025-06-01".parse().expect("valid sample date"),
            end_date: "2025-08-31".parse().expect("valid sample date"),
            day_of_week: "Tuesday".to_string(),
            time: "7:00 PM".to_string(),
            coordinator_id: Some(roster[0].clone()),
        },
        participants: vec![
            entry(&roster[0], "Regular", 12000, PaymentStatus::PaidDirect, Some("2025-05-15")),
            entry(&roster[2], "Regular", 12000, PaymentStatus::Pending, None),
        ],
    }
}

/// Insert the sample roster and events. Callers decide when this runs
/// (startup seed-if-empty, or the seed binary).
pub async fn seed(
    member_repo: &dyn MemberRepository,
    event_repo: &dyn EventRepository,
) -> Result<()> {
    let mut roster = Vec::new();
    for request in sample_members() {
        let member = member_repo.create(request).await?;
        roster.push(member.id);
    }

    event_repo.create(sample_tournament(&roster)).await?;
    event_repo.create(sample_league(&roster)).await?;

    tracing::info!("Seeded {} sample members and 2 sample events", roster.len());
    Ok(())
}
