//! Post-processing passes over finalized collections.
//!
//! Both passes re-touch entities the factories already produced: the
//! overlap resolver corrects same-aircraft flight overlaps, the revision
//! splitter breaks multi-day revisions into one-day line items.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

use aerogen_core::aims::FlightSlot;
use aerogen_core::amos::{EventKind, MaintenanceEvent};

use crate::facts::AirportFacts;

/// Correct temporal overlaps between flights of the same aircraft.
///
/// Sorts the collection by actual departure (cancelled flights and flights
/// without actuals sort last), then walks each registration's non-cancelled
/// flights in consecutive pairs. An overlapping pair
///
/// ```text
/// ---|--------|---------|--------|------> time
///   ts1      ts2       te1      te2
/// ```
///
/// is clamped by moving the second flight's departure to the first
/// flight's arrival and vice versa. Each fix is applied with the given
/// probability; pairs where the first flight fully contains the second are
/// left alone, as the clamp would invert them. This is a local pairwise
/// correction, not a global interval-scheduling pass: non-adjacent
/// overlaps within a registration can survive.
///
/// Returns the number of pairs corrected.
pub fn resolve_overlaps(
    slots: &mut [FlightSlot],
    probability: f64,
    facts: &mut AirportFacts,
) -> usize {
    slots.sort_by_key(|flight| flight.actual_departure.unwrap_or(NaiveDateTime::MAX));

    let mut by_registration: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, flight) in slots.iter().enumerate() {
        if flight.cancelled || flight.actual_departure.is_none() || flight.actual_arrival.is_none()
        {
            continue;
        }
        by_registration
            .entry(flight.slot.aircraft_registration.clone())
            .or_default()
            .push(index);
    }

    let mut fixed = 0;
    for (registration, indexes) in &by_registration {
        // an odd tail element has no partner and needs no correction
        for pair in indexes.chunks(2) {
            let [first, second] = pair else { continue };

            let (Some(ts1), Some(te1)) = (slots[*first].actual_departure, slots[*first].actual_arrival)
            else {
                continue;
            };
            let (Some(ts2), Some(te2)) = (
                slots[*second].actual_departure,
                slots[*second].actual_arrival,
            ) else {
                continue;
            };

            let min_end = te1.min(te2);
            let max_start = ts1.max(ts2);
            if min_end <= max_start {
                continue;
            }
            if te1 > te2 {
                // full containment: the clamp would put arrival before
                // departure on the second flight
                continue;
            }
            if !facts.chance(probability) {
                continue;
            }

            slots[*second].actual_departure = Some(te1);
            slots[*first].actual_arrival = Some(ts2);
            fixed += 1;
            debug!(registration = %registration, "clamped overlapping flight pair");
        }
    }

    fixed
}

/// Split multi-day Revision events into one-day chunks.
///
/// A Revision of at least one day is replaced by `whole_days` clones, plus
/// one more if a fractional remainder exists; every clone keeps the
/// original identifier and start time and lasts exactly one day. The sum
/// of the chunk durations can exceed the original by up to a day.
pub fn split_revisions(events: Vec<MaintenanceEvent>) -> Vec<MaintenanceEvent> {
    let day = TimeDelta::days(1);
    let mut out = Vec::with_capacity(events.len());

    for event in events {
        if event.kind != EventKind::Revision || event.duration < day {
            out.push(event);
            continue;
        }

        let whole_days = event.duration.num_days();
        let remainder = event.duration - TimeDelta::days(whole_days);
        let chunks = whole_days + i64::from(remainder > TimeDelta::zero());

        debug!(
            maintenance_id = %event.maintenance_id,
            chunks,
            "splitting revision into one-day chunks"
        );
        for _ in 0..chunks {
            let mut chunk = event.clone();
            chunk.duration = day;
            out.push(chunk);
        }
    }

    out
}
