//! Who each clue points at
//!
//! A fixed-size hash table with separate chaining. Entries live in one arena
//! and each bucket holds the index of the most recently added entry of its
//! chain. The table never grows; long chains simply scan further.

use crate::GameError;
use std::collections::HashSet;

/// Table size used when nothing else is configured
pub const DEFAULT_BUCKETS: usize = 53;

/// Bucket for `text` in a table of `buckets` slots.
///
/// Folds every byte in as `h = h * 33 + byte` starting from 5381.
pub fn clue_hash(text: &str, buckets: usize) -> usize {
    let hash = text
        .bytes()
        .fold(5381u64, |h, byte| h.wrapping_mul(33).wrapping_add(u64::from(byte)));
    (hash % buckets as u64) as usize
}

#[derive(Debug, Clone)]
struct Entry {
    clue: String,
    suspect: String,
    next: Option<usize>,
}

/// Clue text to suspect name
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: Vec<Option<usize>>,
    entries: Vec<Entry>,
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self {
            buckets: vec![None; DEFAULT_BUCKETS],
            entries: Vec::new(),
        }
    }

    pub fn with_buckets(buckets: usize) -> Result<Self, GameError> {
        if buckets == 0 {
            return Err(GameError::InvalidConfig(
                "suspect table needs at least one bucket".to_string(),
            ));
        }
        Ok(Self {
            buckets: vec![None; buckets],
            entries: Vec::new(),
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket_of(&self, clue: &str) -> usize {
        clue_hash(clue, self.buckets.len())
    }

    /// Put `clue -> suspect` at the head of its chain.
    ///
    /// Registering the same clue again shadows the older entry.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = self.bucket_of(clue);
        self.entries.push(Entry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(self.entries.len() - 1);
    }

    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.chain(self.bucket_of(clue))
            .find(|(key, _)| *key == clue)
            .map(|(_, suspect)| suspect)
    }

    /// Entries of one bucket, newest first
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            cursor: self.buckets.get(bucket).copied().flatten(),
        }
    }

    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.chain(bucket).count()
    }

    /// Distinct suspects, in the order they were first registered
    pub fn suspects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.suspect.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk along one collision chain
pub struct Chain<'a> {
    entries: &'a [Entry],
    cursor: Option<usize>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = &self.entries[self.cursor?];
        self.cursor = entry.next;
        Some((entry.clue.as_str(), entry.suspect.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_known_values() {
        // 5381 * 33 + 'a' (97) = 177670; 177670 % 53 = 14
        assert_eq!(clue_hash("a", 53), 14);
        assert_eq!(clue_hash("", 53), 5381 % 53);
        assert_eq!(clue_hash("anything", 1), 0);
    }

    #[test]
    fn hash_stays_in_range() {
        let long = "x".repeat(500);
        for buckets in [1, 2, 7, 53, 101] {
            for text in ["", "a", "Pegadas misteriosas no tapete", "ÁÉÍ", long.as_str()] {
                let bucket = clue_hash(text, buckets);
                assert!(bucket < buckets);
                assert_eq!(bucket, clue_hash(text, buckets));
            }
        }
    }

    #[test]
    fn lookup_finds_registered_suspects() {
        let mut index = SuspectIndex::new();
        index.insert("Pegadas misteriosas no tapete", "Jardineiro");
        index.insert("Um relógio parado às 3h15", "Mordomo");
        assert_eq!(index.lookup("Pegadas misteriosas no tapete"), Some("Jardineiro"));
        assert_eq!(index.lookup("Um relógio parado às 3h15"), Some("Mordomo"));
        assert_eq!(index.lookup("pegadas misteriosas no tapete"), None);
        assert_eq!(index.lookup(""), None);
    }

    #[test]
    fn colliding_clues_stay_apart() {
        // A single bucket forces every entry onto the same chain
        let mut index = SuspectIndex::with_buckets(1).unwrap();
        index.insert("A", "X");
        index.insert("B", "Y");
        index.insert("C", "Z");
        assert_eq!(index.bucket_len(0), 3);
        assert_eq!(index.lookup("A"), Some("X"));
        assert_eq!(index.lookup("B"), Some("Y"));
        assert_eq!(index.lookup("C"), Some("Z"));
        let chain: Vec<_> = index.chain(0).map(|(clue, _)| clue).collect();
        assert_eq!(chain, vec!["C", "B", "A"]);
    }

    #[test]
    fn newest_duplicate_wins() {
        let mut index = SuspectIndex::new();
        index.insert("A", "X");
        index.insert("A", "Y");
        assert_eq!(index.lookup("A"), Some("Y"));
        assert_eq!(index.len(), 2);
        assert_eq!(index.bucket_len(index.bucket_of("A")), 2);
    }

    #[test]
    fn suspects_are_listed_once() {
        let mut index = SuspectIndex::new();
        index.insert("A", "Mordomo");
        index.insert("B", "Cozinheira");
        index.insert("C", "Mordomo");
        assert_eq!(index.suspects(), vec!["Mordomo", "Cozinheira"]);
    }

    #[test]
    fn zero_buckets_is_a_config_error() {
        assert!(matches!(
            SuspectIndex::with_buckets(0),
            Err(GameError::InvalidConfig(_))
        ));
        assert_eq!(SuspectIndex::new().bucket_len(999), 0);
    }
}
