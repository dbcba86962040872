use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity for a list entry. Ranks and positions shift on every
/// insert/delete, so background poster updates match on this id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntry {
    #[serde(default)]
    pub id: EntryId,
    pub title: String,
    pub year: Option<u16>,
    pub rank: u32,
    pub score: u8,
    pub poster: Option<String>,
}

impl MovieEntry {
    pub fn new(title: String, year: Option<u16>, rank: u32, score: u8) -> Self {
        Self {
            id: EntryId::new(),
            title,
            year,
            rank,
            score,
            poster: None,
        }
    }
}

/// The ordered collection of movie entries.
///
/// Invariant: entries are ordered by ascending rank and ranks are exactly
/// `1..=len` with no gaps or duplicates. Every mutating method restores the
/// invariant before returning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedList {
    entries: Vec<MovieEntry>,
}

impl RankedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MovieEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&MovieEntry> {
        self.entries.get(position)
    }

    /// Insert `entry` at the position implied by its requested rank: directly
    /// before the first existing entry whose rank is greater or equal, or at
    /// the end when no such entry exists (a rank beyond the current length
    /// clamps to the last position). Ranks are renumbered afterwards.
    pub fn insert(&mut self, entry: MovieEntry) {
        let position = self
            .entries
            .iter()
            .position(|e| e.rank >= entry.rank)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, entry);
        self.renumber();
    }

    /// Remove the entry at a zero-based position and renumber the remainder.
    /// Returns the removed entry, or `None` when the position is out of range.
    pub fn remove(&mut self, position: usize) -> Option<MovieEntry> {
        if position >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(position);
        self.renumber();
        Some(removed)
    }

    /// Set the poster of the entry with the given id, provided it is still
    /// present and still has no poster. Returns whether anything changed.
    pub fn set_poster(&mut self, id: EntryId, poster: String) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) if entry.poster.is_none() => {
                entry.poster = Some(poster);
                true
            }
            _ => false,
        }
    }

    /// Ids of entries that still lack a poster.
    pub fn missing_posters(&self) -> Vec<(EntryId, String)> {
        self.entries
            .iter()
            .filter(|e| e.poster.is_none())
            .map(|e| (e.id, e.title.clone()))
            .collect()
    }

    /// Rewrite every rank to its 1-based position. O(n), runs after every
    /// structural change; stored ranks are never trusted over position order.
    pub fn renumber(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.rank = (i + 1) as u32;
        }
    }
}
