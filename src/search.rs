//! Free-text filters for the list screens. Case-insensitive substring
//! matching over a linear scan; an empty query matches everything.

use crate::domain::{Event, Member};

fn matches(query_lower: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

/// Members by name, email, skill level, or notes.
pub fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let query = query.to_lowercase();
    members
        .iter()
        .filter(|m| matches(&query, &[&m.name, &m.email, &m.skill_level, &m.notes]))
        .collect()
}

/// Events by name, location, or division.
pub fn filter_events<'a>(events: &'a [&'a Event], query: &str) -> Vec<&'a Event> {
    let query = query.to_lowercase();
    events
        .iter()
        .filter(|e| matches(&query, &[&e.name, &e.location, &e.division]))
        .copied()
        .collect()
}

/// Completed events by name, location, or final placing.
pub fn filter_results<'a>(events: &'a [&'a Event], query: &str) -> Vec<&'a Event> {
    let query = query.to_lowercase();
    events
        .iter()
        .filter(|e| {
            let placing = e
                .result
                .as_ref()
                .map(|r| r.final_placing.as_str())
                .unwrap_or("");
            matches(&query, &[&e.name, &e.location, placing])
        })
        .copied()
        .collect()
}
