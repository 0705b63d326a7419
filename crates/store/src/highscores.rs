//! Highscore table - bounded, sorted name/score pairs.
//!
//! The table holds at most 10 entries sorted descending by score and is
//! persisted as one JSON record. A missing or unreadable record yields the
//! default table of placeholder entries.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::kv::RecordStore;

/// Record key under which the table is persisted.
pub const HIGHSCORE_KEY: &str = "slowtris_highscores";

/// Maximum number of entries kept.
pub const TABLE_SIZE: usize = 10;

/// Placeholder name for unused slots.
pub const EMPTY_NAME: &str = "----";

/// One highscore row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: u32,
}

/// Ordered, bounded list of highscore entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreTable {
    entries: Vec<HighscoreEntry>,
}

impl HighscoreTable {
    /// Table of `TABLE_SIZE` placeholder entries.
    pub fn empty() -> Self {
        let entries = (0..TABLE_SIZE)
            .map(|_| HighscoreEntry {
                name: EMPTY_NAME.to_string(),
                score: 0,
            })
            .collect();
        Self { entries }
    }

    /// Load the persisted table, substituting the default table when the
    /// record is absent or unreadable.
    pub fn load(store: &dyn RecordStore) -> Self {
        let record = match store.read(HIGHSCORE_KEY) {
            Ok(Some(data)) => data,
            _ => return Self::empty(),
        };
        match serde_json::from_str::<Vec<HighscoreEntry>>(&record) {
            Ok(entries) => {
                let mut table = Self { entries };
                table.normalize();
                table
            }
            Err(_) => Self::empty(),
        }
    }

    /// Persist the table as a JSON list of `{name, score}` pairs.
    pub fn persist(&self, store: &mut dyn RecordStore) -> Result<()> {
        let data = serde_json::to_string(&self.entries)?;
        store.write(HIGHSCORE_KEY, &data)
    }

    /// Whether `score` would enter the table: strictly above the current
    /// lowest-ranked entry.
    pub fn qualifies(&self, score: u32) -> bool {
        match self.entries.last() {
            Some(last) => score > last.score,
            None => true,
        }
    }

    /// Insert an entry, re-sort descending, and trim to `TABLE_SIZE`.
    ///
    /// The sort is stable, so an equal score ranks below existing entries.
    pub fn insert(&mut self, name: &str, score: u32) {
        self.entries.push(HighscoreEntry {
            name: name.to_string(),
            score,
        });
        self.normalize();
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(TABLE_SIZE);
        while self.entries.len() < TABLE_SIZE {
            self.entries.push(HighscoreEntry {
                name: EMPTY_NAME.to_string(),
                score: 0,
            });
        }
    }

    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }
}

impl Default for HighscoreTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_empty_table_shape() {
        let table = HighscoreTable::empty();
        assert_eq!(table.entries().len(), TABLE_SIZE);
        assert!(table
            .entries()
            .iter()
            .all(|e| e.name == EMPTY_NAME && e.score == 0));
    }

    #[test]
    fn test_load_missing_record_yields_default() {
        let store = MemoryStore::new();
        let table = HighscoreTable::load(&store);
        assert_eq!(table, HighscoreTable::empty());
    }

    #[test]
    fn test_load_corrupt_record_yields_default() {
        let mut store = MemoryStore::new();
        store.write(HIGHSCORE_KEY, "not json {{").unwrap();
        let table = HighscoreTable::load(&store);
        assert_eq!(table, HighscoreTable::empty());
    }

    #[test]
    fn test_persist_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut table = HighscoreTable::empty();
        table.insert("ABCD", 500);
        table.persist(&mut store).unwrap();

        let loaded = HighscoreTable::load(&store);
        assert_eq!(loaded, table);
        assert_eq!(loaded.entries()[0].name, "ABCD");
    }

    #[test]
    fn test_qualifies_is_strict() {
        let mut table = HighscoreTable::empty();
        assert!(!table.qualifies(0));
        assert!(table.qualifies(1));

        for i in 0..TABLE_SIZE {
            table.insert("AAAA", 100 * (i as u32 + 1));
        }
        // Lowest ranked entry is now 100.
        assert!(!table.qualifies(100));
        assert!(table.qualifies(101));
    }

    #[test]
    fn test_insert_keeps_table_sorted_and_bounded() {
        let mut table = HighscoreTable::empty();
        for score in [300, 100, 800, 500, 200, 400, 700, 600, 900, 1000, 50] {
            table.insert("NAME", score);
        }

        assert_eq!(table.entries().len(), TABLE_SIZE);
        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
        // The table was full of real scores by then, so 50 fell off.
        assert_eq!(scores[TABLE_SIZE - 1], 100);
    }

    #[test]
    fn test_qualifying_insert_lands_at_correct_rank() {
        let mut table = HighscoreTable::empty();
        table.insert("ONE ", 100);
        table.insert("TWO ", 300);

        assert!(table.qualifies(200));
        table.insert("MID ", 200);

        assert_eq!(table.entries()[0].score, 300);
        assert_eq!(table.entries()[1].score, 200);
        assert_eq!(table.entries()[1].name, "MID ");
        assert_eq!(table.entries()[2].score, 100);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut table = HighscoreTable::empty();
        table.insert("OLD ", 250);
        table.insert("NEW ", 250);

        assert_eq!(table.entries()[0].name, "OLD ");
        assert_eq!(table.entries()[1].name, "NEW ");
    }
}
