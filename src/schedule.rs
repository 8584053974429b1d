//! Start-time derivation for the agenda timeline.
//!
//! Start times are never stored: they are recomputed on every render by
//! walking the items in order from a fixed session start and accumulating
//! each item's duration.

use time::format_description::FormatItem;
use time::macros::{format_description, time};
use time::{Duration, Time};

/// Meetings are laid out from 09:00 of the current day unless the agenda
/// carries its own date string.
pub const DEFAULT_SESSION_START: Time = time!(09:00);

const START_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]");

/// Display start time for each item: item `i` starts at `session_start` plus
/// the sum of durations of items `[0..i)`.
pub fn derive_start_times<I>(durations_minutes: I, session_start: Time) -> Vec<String>
where
    I: IntoIterator<Item = u32>,
{
    let mut cursor = session_start;
    durations_minutes
        .into_iter()
        .map(|minutes| {
            let label = format_start_time(cursor);
            cursor += Duration::minutes(i64::from(minutes));
            label
        })
        .collect()
}

/// Total minutes across all items, for the timeline badge.
pub fn total_duration_minutes<I>(durations_minutes: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    durations_minutes.into_iter().sum()
}

fn format_start_time(t: Time) -> String {
    t.format(START_TIME_FORMAT).unwrap_or_default()
}
