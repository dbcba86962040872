pub mod backfill;
pub mod engine;

pub use crate::domain::model::{EntryId, MovieEntry, RankedList};
pub use crate::domain::ports::{ConfigProvider, PosterLookup, Store};
pub use crate::utils::error::Result;
