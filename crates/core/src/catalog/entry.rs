//! The catalog record type.

use serde::{Deserialize, Serialize};

/// One catalog entry: a film plus its aggregate rating statistics.
///
/// Entries are plain values. The tree copies them in on insert and hands
/// out references on lookup; no entry knows its position in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique catalog key.
    pub id: u64,
    /// Film title.
    pub title: String,
    /// Attribution (director, channel, ...).
    pub director: String,
    /// Release year.
    pub year: i32,
    /// Category label (e.g. "Drama").
    pub category: String,
    /// Aggregate rating, conceptually 0.0..=10.0 (not enforced).
    pub rating: f64,
    /// Number of votes behind `rating`.
    pub votes: u64,
}

impl Entry {
    /// Fold another rating sample for the same key into this entry.
    ///
    /// The new rating is the vote-weighted average of both ratings, using
    /// the pre-merge vote counts as weights, rounded to 2 decimal places.
    /// Votes accumulate. When both sides carry zero votes the weighted
    /// average is undefined and the rating is left as-is.
    pub fn merge_votes(&mut self, other: &Entry) {
        let total_votes = self.votes + other.votes;
        if total_votes > 0 {
            let weighted = self.rating * self.votes as f64 + other.rating * other.votes as f64;
            self.rating = round2(weighted / total_votes as f64);
        }
        self.votes = total_votes;
    }
}

/// Round to 2 decimal places, the precision persisted ratings carry.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception(rating: f64, votes: u64) -> Entry {
        Entry {
            id: 500,
            title: "Inception".to_string(),
            director: "Christopher Nolan".to_string(),
            year: 2010,
            category: "Sci-Fi".to_string(),
            rating,
            votes,
        }
    }

    #[test]
    fn test_merge_votes_weighted_average() {
        let mut entry = inception(8.8, 2_400_000);
        entry.merge_votes(&inception(10.0, 2_400_000));

        assert_eq!(entry.votes, 4_800_000);
        assert_eq!(entry.rating, 9.4);
    }

    #[test]
    fn test_merge_votes_uses_pre_merge_weights() {
        let mut entry = inception(9.0, 100);
        entry.merge_votes(&inception(6.0, 300));

        // (9.0*100 + 6.0*300) / 400 = 6.75
        assert_eq!(entry.votes, 400);
        assert_eq!(entry.rating, 6.75);
    }

    #[test]
    fn test_merge_votes_rounds_to_two_decimals() {
        let mut entry = inception(8.0, 3);
        entry.merge_votes(&inception(9.0, 4));

        // (24 + 36) / 7 = 8.5714... -> 8.57
        assert_eq!(entry.rating, 8.57);
    }

    #[test]
    fn test_merge_votes_both_zero_keeps_rating() {
        let mut entry = inception(7.5, 0);
        entry.merge_votes(&inception(3.0, 0));

        assert_eq!(entry.votes, 0);
        assert_eq!(entry.rating, 7.5);
    }

    #[test]
    fn test_entry_json_round_trip() {
        let entry = inception(8.8, 2_400_000);
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_entry_missing_field_fails() {
        let json = r#"{"id": 1, "title": "No Stats"}"#;
        let result: Result<Entry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_mistyped_field_fails() {
        let json = r#"{
            "id": "not-a-number",
            "title": "Bad",
            "director": "X",
            "year": 2000,
            "category": "Drama",
            "rating": 5.0,
            "votes": 10
        }"#;
        let result: Result<Entry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
