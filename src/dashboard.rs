//! Derived dashboard views. Every function is pure: it takes the current
//! in-memory snapshot (and the caller's notion of "today") and recomputes
//! from scratch. Collections are tens to low hundreds of records, so full
//! recomputation per call is fine.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Event, EventKind, Member, PaymentStatus, Snapshot};

/// The dashboard shows at most this many upcoming events.
pub const UPCOMING_LIMIT: usize = 5;

/// Resolve a participant's display name through the member list. Dangling
/// references (member deleted after being rostered) resolve to "Unknown".
pub fn member_display_name<'a>(members: &'a [Member], member_id: &str) -> &'a str {
    members
        .iter()
        .find(|m| m.id == member_id)
        .map(|m| m.name.as_str())
        .unwrap_or("Unknown")
}

/// Events whose primary date is on or after `today`, ascending by that
/// date, capped at [`UPCOMING_LIMIT`].
pub fn upcoming_events<'a>(snapshot: &'a Snapshot, today: NaiveDate) -> Vec<&'a Event> {
    let mut events: Vec<&Event> = snapshot
        .events()
        .filter(|event| event.primary_date() >= today)
        .collect();
    events.sort_by_key(|event| event.primary_date());
    events.truncate(UPCOMING_LIMIT);
    events
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingPayment {
    pub event_name: String,
    pub member_name: String,
    pub amount_cents: i64,
    pub event_kind: EventKind,
}

/// All participant entries still marked pending, across every event,
/// projected for display. Overdue entries are not listed here; they show
/// up in [`payment_totals`].
pub fn pending_payments(snapshot: &Snapshot) -> Vec<PendingPayment> {
    snapshot
        .events()
        .flat_map(|event| {
            event
                .participants
                .iter()
                .filter(|entry| entry.payment_status == PaymentStatus::Pending)
                .map(|entry| PendingPayment {
                    event_name: event.name.clone(),
                    member_name: member_display_name(&snapshot.members, &entry.member_id)
                        .to_string(),
                    amount_cents: entry.amount_owed_cents,
                    event_kind: event.kind(),
                })
        })
        .collect()
}

pub fn pending_total_cents(payments: &[PendingPayment]) -> i64 {
    payments.iter().map(|payment| payment.amount_cents).sum()
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EventCounts {
    pub active: usize,
    pub completed: usize,
}

/// Partition on completion. "Active" here means not completed, which
/// deliberately includes interested, registered, and cancelled events.
pub fn event_counts(snapshot: &Snapshot) -> EventCounts {
    let completed = snapshot.events().filter(|event| event.is_completed()).count();
    let active = snapshot.events().count() - completed;
    EventCounts { active, completed }
}

/// Completed events, newest completion first. Events completed without a
/// recorded date sort last.
pub fn completed_events<'a>(snapshot: &'a Snapshot) -> Vec<&'a Event> {
    let mut events: Vec<&Event> = snapshot.events().filter(|event| event.is_completed()).collect();
    events.sort_by(|a, b| {
        let a_date = a.result.as_ref().and_then(|r| r.completed_on);
        let b_date = b.result.as_ref().and_then(|r| r.completed_on);
        b_date.cmp(&a_date)
    });
    events
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResultsStats {
    pub total_completed: usize,
    pub first_places: usize,
    pub top_three: usize,
}

/// Placing statistics over completed events. This is a case-insensitive
/// substring match on the free-text final placing ("1st", "2nd", "3rd"),
/// not a structured rank, so "31st Street Open" counts as a first place.
pub fn results_stats(snapshot: &Snapshot) -> ResultsStats {
    let completed: Vec<&Event> = snapshot.events().filter(|event| event.is_completed()).collect();

    let placing = |event: &Event| -> String {
        event
            .result
            .as_ref()
            .map(|r| r.final_placing.to_lowercase())
            .unwrap_or_default()
    };

    let first_places = completed.iter().filter(|e| placing(e).contains("1st")).count();
    let top_three = completed
        .iter()
        .filter(|e| {
            let p = placing(e);
            p.contains("1st") || p.contains("2nd") || p.contains("3rd")
        })
        .count();

    ResultsStats {
        total_completed: completed.len(),
        first_places,
        top_three,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct PaymentTotals {
    pub paid_cents: i64,
    pub pending_cents: i64,
    pub overdue_cents: i64,
}

/// Amounts owed across all events, bucketed by payment status.
pub fn payment_totals(snapshot: &Snapshot) -> PaymentTotals {
    let mut totals = PaymentTotals::default();
    for event in snapshot.events() {
        for entry in &event.participants {
            match entry.payment_status {
                PaymentStatus::PaidDirect | PaymentStatus::PaidCoordinator => {
                    totals.paid_cents += entry.amount_owed_cents;
                }
                PaymentStatus::Pending => totals.pending_cents += entry.amount_owed_cents,
                PaymentStatus::Overdue => totals.overdue_cents += entry.amount_owed_cents,
            }
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventResult, EventStatus, MemberStatus, ParticipantEntry, Schedule};

    fn member(id: &str, name: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            phone: String::new(),
            skill_level: "3.5".to_string(),
            payment_handle: String::new(),
            notes: String::new(),
            joined_on: None,
            status: MemberStatus::Active,
        }
    }

    fn tournament(id: &str, name: &str, date: &str) -> Event {
        Event {
            id: id.to_string(),
            name: name.to_string(),
            location: "Central Park Courts".to_string(),
            division: "4.0".to_string(),
            fee_cents: 5000,
            status: EventStatus::Registered,
            maps_link: None,
            info_link: None,
            notes: String::new(),
            result: None,
            schedule: Schedule::Tournament {
                date: date.parse().unwrap(),
                time: String::new(),
            },
            participants: vec![],
        }
    }

    fn entry(member_id: &str, cents: i64, status: PaymentStatus) -> ParticipantEntry {
        ParticipantEntry {
            member_id: member_id.to_string(),
            role: "Player".to_string(),
            amount_owed_cents: cents,
            payment_status: status,
            paid_on: None,
        }
    }

    fn completed(mut event: Event, placing: &str, on: &str) -> Event {
        event.status = EventStatus::Completed;
        event.result = Some(EventResult {
            final_placing: placing.to_string(),
            completed_on: Some(on.parse().unwrap()),
            notes: String::new(),
        });
        event
    }

    #[test]
    fn test_upcoming_sorted_and_capped_to_future() {
        let snapshot = Snapshot {
            members: vec![],
            tournaments: vec![
                tournament("t1", "Past", "2025-01-01"),
                tournament("t2", "June", "2025-06-15"),
                tournament("t3", "March", "2025-03-10"),
            ],
            leagues: vec![],
        };

        let today: NaiveDate = "2025-02-01".parse().unwrap();
        let upcoming = upcoming_events(&snapshot, today);
        let names: Vec<&str> = upcoming.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["March", "June"]);
    }

    #[test]
    fn test_upcoming_includes_today_and_caps_at_five() {
        let mut snapshot = Snapshot::default();
        for i in 0..7 {
            snapshot.tournaments.push(tournament(
                &format!("t{}", i),
                &format!("Event {}", i),
                &format!("2025-06-{:02}", i + 1),
            ));
        }

        let today: NaiveDate = "2025-06-01".parse().unwrap();
        let upcoming = upcoming_events(&snapshot, today);
        assert_eq!(upcoming.len(), UPCOMING_LIMIT);
        assert_eq!(upcoming[0].name, "Event 0");
    }

    #[test]
    fn test_pending_payments_total() {
        let mut t = tournament("t1", "Spring Championship", "2025-06-15");
        t.participants = vec![
            entry("m1", 5000, PaymentStatus::Pending),
            entry("m2", 8000, PaymentStatus::Pending),
            entry("m3", 2000, PaymentStatus::PaidDirect),
            entry("m4", 9000, PaymentStatus::Overdue),
        ];
        let snapshot = Snapshot {
            members: vec![member("m1", "John Smith")],
            tournaments: vec![t],
            leagues: vec![],
        };

        let pending = pending_payments(&snapshot);
        assert_eq!(pending.len(), 2);
        assert_eq!(pending_total_cents(&pending), 13000);
        assert_eq!(pending[0].member_name, "John Smith");
        // m2 was never added to the roster of members
        assert_eq!(pending[1].member_name, "Unknown");
        assert_eq!(pending[0].event_kind, EventKind::Tournament);
    }

    #[test]
    fn test_event_counts_treat_cancelled_as_active() {
        let mut cancelled = tournament("t2", "Rained Out", "2025-04-01");
        cancelled.status = EventStatus::Cancelled;
        let snapshot = Snapshot {
            members: vec![],
            tournaments: vec![
                completed(tournament("t1", "Winter Open", "2025-01-10"), "1st Place", "2025-01-11"),
                cancelled,
            ],
            leagues: vec![tournament("l1", "Live", "2025-07-01")],
        };

        assert_eq!(event_counts(&snapshot), EventCounts { active: 2, completed: 1 });
    }

    #[test]
    fn test_results_stats_substring_match() {
        let snapshot = Snapshot {
            members: vec![],
            tournaments: vec![
                completed(tournament("t1", "A", "2025-01-01"), "1st Place", "2025-01-02"),
                completed(tournament("t2", "B", "2025-02-01"), "3rd place", "2025-02-02"),
                completed(tournament("t3", "C", "2025-03-01"), "Semifinalist", "2025-03-02"),
                // Free-text matching is deliberately this literal.
                completed(tournament("t4", "D", "2025-04-01"), "31st Street Open", "2025-04-02"),
            ],
            leagues: vec![],
        };

        let stats = results_stats(&snapshot);
        assert_eq!(stats.total_completed, 4);
        assert_eq!(stats.first_places, 2);
        assert_eq!(stats.top_three, 3);
    }

    #[test]
    fn test_completed_events_sorted_newest_first() {
        let snapshot = Snapshot {
            members: vec![],
            tournaments: vec![
                completed(tournament("t1", "Older", "2025-01-01"), "", "2025-01-02"),
                completed(tournament("t2", "Newer", "2025-03-01"), "", "2025-03-02"),
            ],
            leagues: vec![],
        };

        let results = completed_events(&snapshot);
        assert_eq!(results[0].name, "Newer");
        assert_eq!(results[1].name, "Older");
    }

    #[test]
    fn test_payment_totals_buckets() {
        let mut t = tournament("t1", "Spring", "2025-06-15");
        t.participants = vec![
            entry("m1", 5000, PaymentStatus::PaidDirect),
            entry("m2", 12000, PaymentStatus::PaidCoordinator),
            entry("m3", 8000, PaymentStatus::Pending),
            entry("m4", 3000, PaymentStatus::Overdue),
        ];
        let snapshot = Snapshot {
            members: vec![],
            tournaments: vec![t],
            leagues: vec![],
        };

        assert_eq!(
            payment_totals(&snapshot),
            PaymentTotals {
                paid_cents: 17000,
                pending_cents: 8000,
                overdue_cents: 3000,
            }
        );
    }
}
