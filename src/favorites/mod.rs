//! Locally persisted favorites

pub mod storage;
pub mod store;

pub use storage::{
    default_favorites_path, FavoritesStorage, JsonFileStorage, MemoryStorage, STORAGE_KEY,
};
pub use store::FavoritesStore;
