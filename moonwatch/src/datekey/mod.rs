//! Canonical calendar-date keys.
//!
//! Every layer of the system identifies a day by its [`DateKey`]: the
//! ISO-8601 calendar date (`YYYY-MM-DD`). Cache lookups, provider requests,
//! and rendered output all use the same key, so the same logical day always
//! maps to the same cache entry no matter how it was produced.
//!
//! # Canonical Form
//!
//! Locale-formatted dates (`8/23/2026`) and ISO dates (`2026-08-23`) for the
//! same day must never coexist as distinct keys. [`DateKey::normalize`]
//! accepts a few common textual forms and always re-renders them as
//! `%Y-%m-%d`.

use std::fmt;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format for canonical keys.
const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Input formats accepted by [`DateKey::normalize`], tried in order.
const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Errors produced while normalizing user-supplied dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// No date was supplied at all.
    #[error("no date supplied")]
    Missing,

    /// The supplied text could not be parsed as a calendar date.
    #[error("unrecognized date: {0:?}")]
    Invalid(String),
}

/// Canonical calendar-date key (`YYYY-MM-DD`).
///
/// Used as the cache key and as the `date` query parameter on provider
/// requests. Construct via [`DateKey::today`], [`DateKey::offset`], or
/// [`DateKey::normalize`]; all three yield identical keys for the same
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// Today's date plus `days` (may be negative).
    pub fn offset(days: i64) -> Self {
        Self::from_naive(Local::now().date_naive() + Duration::days(days))
    }

    /// Canonicalizes a user-supplied date string.
    ///
    /// Accepts `%Y-%m-%d`, `%Y/%m/%d`, and `%m/%d/%Y`. Surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Missing`] for empty/blank input and
    /// [`DateError::Invalid`] when no accepted format matches.
    pub fn normalize(raw: &str) -> Result<Self, DateError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DateError::Missing);
        }

        for format in ACCEPTED_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Ok(Self::from_naive(date));
            }
        }

        Err(DateError::Invalid(raw.to_string()))
    }

    /// Builds a key from an already-parsed calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        DateKey(date.format(CANONICAL_FORMAT).to_string())
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_iso_form() {
        let key = DateKey::normalize("2026-08-23").unwrap();
        assert_eq!(key.as_str(), "2026-08-23");
    }

    #[test]
    fn test_normalize_equivalent_forms_agree() {
        let iso = DateKey::normalize("2026-08-23").unwrap();
        let slashed = DateKey::normalize("2026/08/23").unwrap();
        let us = DateKey::normalize("08/23/2026").unwrap();
        assert_eq!(iso, slashed);
        assert_eq!(iso, us);
    }

    #[test]
    fn test_normalize_pads_single_digits() {
        let key = DateKey::normalize("2026/1/5").unwrap();
        assert_eq!(key.as_str(), "2026-01-05");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let key = DateKey::normalize("  2026-08-23  ").unwrap();
        assert_eq!(key.as_str(), "2026-08-23");
    }

    #[test]
    fn test_normalize_empty_is_missing() {
        assert_eq!(DateKey::normalize(""), Err(DateError::Missing));
        assert_eq!(DateKey::normalize("   "), Err(DateError::Missing));
    }

    #[test]
    fn test_normalize_garbage_is_invalid() {
        match DateKey::normalize("next tuesday") {
            Err(DateError::Invalid(raw)) => assert_eq!(raw, "next tuesday"),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_today_equals_offset_zero() {
        // Both read the clock; equal unless the test straddles midnight.
        assert_eq!(DateKey::today(), DateKey::offset(0));
    }

    #[test]
    fn test_offset_moves_by_days() {
        let today = NaiveDate::parse_from_str(DateKey::today().as_str(), "%Y-%m-%d").unwrap();
        let tomorrow = DateKey::offset(1);
        assert_eq!(
            tomorrow,
            DateKey::from_naive(today + Duration::days(1))
        );
    }

    #[test]
    fn test_offset_accepts_negative_days() {
        let today = NaiveDate::parse_from_str(DateKey::today().as_str(), "%Y-%m-%d").unwrap();
        let yesterday = DateKey::offset(-1);
        assert_eq!(
            yesterday,
            DateKey::from_naive(today - Duration::days(1))
        );
    }

    #[test]
    fn test_display_matches_canonical_form() {
        let key = DateKey::normalize("08/23/2026").unwrap();
        assert_eq!(format!("{}", key), "2026-08-23");
    }

    #[test]
    fn test_serde_round_trip_is_transparent() {
        let key = DateKey::normalize("2026-08-23").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2026-08-23\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
