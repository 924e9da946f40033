//! Dog Viewer - random dog images with locally persisted favorites
//!
//! Fetches random dog pictures from the Dog CEO API (with retry and
//! backoff) and keeps a list of favorites in a local JSON file.

pub mod api;
pub mod error;
pub mod favorites;
pub mod models;
pub mod viewer;

// Re-export commonly used items
pub use api::{extract_breed_from_url, DogApiClient, RetryPolicy, DOG_API_BASE};
pub use error::{DogApiError, DogApiResult, StorageError, StorageResult, TransportFailure};
pub use favorites::{FavoritesStorage, FavoritesStore, JsonFileStorage, MemoryStorage};
pub use models::DogImage;
pub use viewer::{DogViewer, DEFAULT_BATCH_SIZE};
