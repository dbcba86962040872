pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{omdb::OmdbClient, storage::JsonFileStore};
pub use crate::core::engine::{ListEngine, STORAGE_KEY};
pub use crate::domain::model::{EntryId, MovieEntry, RankedList};
pub use crate::domain::ports::{ConfigProvider, PosterLookup, Store};
pub use crate::utils::error::{RankerError, Result};
