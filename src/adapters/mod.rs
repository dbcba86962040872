// Adapters layer: concrete implementations for external systems (metadata provider, storage).

pub mod omdb;
pub mod storage;
