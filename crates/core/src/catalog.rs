//! Ordering, search and recency helpers for catalog listings.
//!
//! Stores return articles and courses in insertion order; listing pages
//! re-sort and filter the copies they get back using these functions.

use std::cmp::Ordering;

use chrono::Duration;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// How many related articles an article page shows.
pub const RELATED_ARTICLE_LIMIT: usize = 3;

/// Window, in days, for the "this week" dashboard counters.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Reading speed used for article reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Descending by creation time.
pub fn newest_first(a: &Timestamp, b: &Timestamp) -> Ordering {
    b.cmp(a)
}

/// Pinned entries first, then newest first within each group.
pub fn pinned_then_newest(
    a_pinned: bool,
    a_created: &Timestamp,
    b_pinned: bool,
    b_created: &Timestamp,
) -> Ordering {
    b_pinned
        .cmp(&a_pinned)
        .then_with(|| newest_first(a_created, b_created))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// An empty query matches everything.
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

// ---------------------------------------------------------------------------
// Recency
// ---------------------------------------------------------------------------

/// Whether `created_at` falls at or after `now - RECENT_WINDOW_DAYS`.
pub fn created_within_window(created_at: &Timestamp, now: &Timestamp) -> bool {
    *created_at >= *now - Duration::days(RECENT_WINDOW_DAYS)
}

/// Rounded-up whole days between `created_at` and `now` is at most
/// [`RECENT_WINDOW_DAYS`]. The distance is absolute, so future-dated
/// entries within a week also count.
pub fn posted_this_week(created_at: &Timestamp, now: &Timestamp) -> bool {
    let diff_ms = (*now - *created_at).num_milliseconds().abs();
    let diff_days = (diff_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    diff_days <= RECENT_WINDOW_DAYS
}

// ---------------------------------------------------------------------------
// Reading time
// ---------------------------------------------------------------------------

/// Estimated reading time in whole minutes, rounded up.
///
/// Words are the pieces between single spaces, markup included, so empty
/// content still counts as one word and reads in one minute.
pub fn reading_minutes(content: &str) -> usize {
    content.split(' ').count().div_ceil(WORDS_PER_MINUTE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(day: u32, hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    // -- ordering ------------------------------------------------------------

    #[test]
    fn newest_first_orders_descending() {
        let mut dates = vec![at(1, 0), at(3, 0), at(2, 0)];
        dates.sort_by(newest_first);
        assert_eq!(dates, vec![at(3, 0), at(2, 0), at(1, 0)]);
    }

    #[test]
    fn pinned_entry_beats_newer_unpinned() {
        let ord = pinned_then_newest(true, &at(1, 0), false, &at(20, 0));
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn equal_pin_falls_back_to_date() {
        assert_eq!(
            pinned_then_newest(false, &at(5, 0), false, &at(6, 0)),
            Ordering::Greater
        );
        assert_eq!(
            pinned_then_newest(true, &at(6, 0), true, &at(5, 0)),
            Ordering::Less
        );
    }

    // -- search --------------------------------------------------------------

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search("RUST", &["Learning rust", ""]));
        assert!(matches_search("body", &["title", "Some BODY text"]));
        assert!(!matches_search("python", &["Learning rust", "content"]));
    }

    #[test]
    fn empty_search_matches_all() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("", &[]));
    }

    // -- recency -------------------------------------------------------------

    #[test]
    fn window_is_inclusive_of_boundary() {
        let now = at(15, 12);
        assert!(created_within_window(&at(8, 12), &now));
        assert!(!created_within_window(&at(8, 11), &now));
        assert!(created_within_window(&at(15, 0), &now));
    }

    #[test]
    fn posted_this_week_rounds_up_partial_days() {
        let now = at(15, 12);
        // Exactly seven days.
        assert!(posted_this_week(&at(8, 12), &now));
        // Seven days and one hour rounds up to eight.
        assert!(!posted_this_week(&at(8, 11), &now));
        // Future dates count by absolute distance.
        assert!(posted_this_week(&at(17, 0), &now));
    }

    // -- reading time --------------------------------------------------------

    #[test]
    fn reading_minutes_rounds_up_per_two_hundred_words() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes("one two three"), 1);
        assert_eq!(reading_minutes(&["word"; 200].join(" ")), 1);
        assert_eq!(reading_minutes(&["word"; 201].join(" ")), 2);
    }
}
