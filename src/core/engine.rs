use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::core::backfill::BackfillTracker;
use crate::domain::model::{EntryId, MovieEntry, RankedList};
use crate::domain::ports::{PosterLookup, Store};
use crate::utils::error::{RankerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range,
};

/// Fixed key identifying this application's dataset in the store.
pub const STORAGE_KEY: &str = "movies";

/// The ranked-list engine: owns the collection, serializes all mutations
/// through one lock, persists after every change, and drives best-effort
/// poster backfill for entries restored without one.
///
/// User mutations and backfill completions all go through the same
/// `Mutex<RankedList>`, so each applies as an atomic step and the
/// rank-contiguity invariant cannot be observed half-restored.
pub struct ListEngine<S, L> {
    state: Arc<Mutex<RankedList>>,
    store: Arc<S>,
    lookup: Arc<L>,
    backfill: BackfillTracker,
}

impl<S, L> ListEngine<S, L>
where
    S: Store + 'static,
    L: PosterLookup + 'static,
{
    pub fn new(store: S, lookup: L) -> Self {
        Self {
            state: Arc::new(Mutex::new(RankedList::new())),
            store: Arc::new(store),
            lookup: Arc::new(lookup),
            backfill: BackfillTracker::new(),
        }
    }

    /// Load the persisted collection, or start empty when the store has no
    /// blob under the key. Stored ranks are not trusted: the list is
    /// renumbered from position order before use. Entries restored without a
    /// poster get a detached backfill lookup each.
    pub async fn restore(&self) -> Result<()> {
        let restored = match self.store.load(STORAGE_KEY).await? {
            Some(blob) => {
                let mut list: RankedList = serde_json::from_slice(&blob)?;
                list.renumber();
                info!(entries = list.len(), "Restored list from store");
                list
            }
            None => {
                debug!("No stored list found; starting empty");
                RankedList::new()
            }
        };

        let missing = restored.missing_posters();
        {
            let mut state = self.state.lock().await;
            *state = restored;
        }

        if !missing.is_empty() {
            info!(count = missing.len(), "Scheduling poster backfill");
        }
        for (id, title) in missing {
            self.spawn_backfill(id, title).await;
        }

        Ok(())
    }

    /// Add an entry at the requested rank. Validation failures are returned
    /// to the caller and leave the list untouched; a failed poster lookup is
    /// not an error, the entry is simply added without one. The lookup is
    /// awaited inline, so callers can present a busy state around this call.
    pub async fn add_entry(
        &self,
        title: &str,
        year: Option<u16>,
        rank: u32,
        score: u8,
    ) -> Result<EntryId> {
        validate_non_empty_string("title", title)?;
        validate_positive_number("rank", rank, 1)?;
        validate_range("score", score, 1, 10)?;
        let title = title.trim().to_string();

        let poster = match self.lookup.lookup(&title, year).await {
            Ok(poster) => poster,
            Err(e) => {
                warn!(title = %title, error = %e, "Poster lookup failed; adding entry without poster");
                None
            }
        };

        let mut entry = MovieEntry::new(title, year, rank, score);
        entry.poster = poster;
        let id = entry.id;

        let mut list = self.state.lock().await;
        list.insert(entry);
        self.persist(&list).await;
        Ok(id)
    }

    /// Remove the entry at a zero-based position. Out-of-range positions are
    /// an explicit error, never a silent no-op.
    pub async fn delete_entry(&self, position: usize) -> Result<MovieEntry> {
        let mut list = self.state.lock().await;
        let len = list.len();
        let removed = list
            .remove(position)
            .ok_or(RankerError::OutOfRangeError { position, len })?;
        info!(title = %removed.title, "Deleted entry");
        self.persist(&list).await;
        Ok(removed)
    }

    /// Snapshot of the current collection, in rank order.
    pub async fn entries(&self) -> Vec<MovieEntry> {
        self.state.lock().await.entries().to_vec()
    }

    /// Block until every outstanding backfill lookup has resolved. Used by
    /// one-shot callers that want posters settled before rendering.
    pub async fn wait_for_backfill(&self) {
        self.backfill.wait().await;
    }

    /// Serialize and write the collection under the fixed key. Write failures
    /// are logged and absorbed: in-memory state stays authoritative and the
    /// next successful write catches the store up.
    async fn persist(&self, list: &RankedList) {
        let blob = match serde_json::to_vec(list) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Failed to serialize list; skipping persistence");
                return;
            }
        };
        if let Err(e) = self.store.save(STORAGE_KEY, &blob).await {
            warn!(error = %e, "Failed to persist list; in-memory state remains authoritative");
        }
    }

    /// Detached lookup for one entry missing a poster. Matches its result
    /// back by entry id against whatever the collection is at completion
    /// time; if the entry was deleted or already filled in, the result is
    /// discarded. Backfill looks up by title only.
    async fn spawn_backfill(&self, id: EntryId, title: String) {
        let state = Arc::clone(&self.state);
        let store = Arc::clone(&self.store);
        let lookup = Arc::clone(&self.lookup);

        self.backfill
            .track(async move {
                let poster = match lookup.lookup(&title, None).await {
                    Ok(Some(poster)) => poster,
                    Ok(None) => {
                        debug!(title = %title, "No poster found during backfill");
                        return;
                    }
                    Err(e) => {
                        warn!(title = %title, error = %e, "Backfill lookup failed");
                        return;
                    }
                };

                let mut list = state.lock().await;
                if !list.set_poster(id, poster) {
                    debug!(title = %title, "Entry gone or already filled; discarding backfill result");
                    return;
                }
                debug!(title = %title, "Backfilled poster");

                let blob = match serde_json::to_vec(&*list) {
                    Ok(blob) => blob,
                    Err(e) => {
                        warn!(error = %e, "Failed to serialize list after backfill");
                        return;
                    }
                };
                if let Err(e) = store.save(STORAGE_KEY, &blob).await {
                    warn!(error = %e, "Failed to persist backfilled poster");
                }
            })
            .await;
    }
}
