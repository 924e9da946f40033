use std::collections::HashSet;

use super::storage::FavoritesStorage;
use crate::models::DogImage;

/// Ordered set of favorite dog images, written back to storage on every change
///
/// Storage failures never reach the caller: a bad or missing payload loads
/// as an empty list and failed writes are logged while the in-memory state
/// stays authoritative for the session.
pub struct FavoritesStore {
    favorites: Vec<DogImage>,
    storage: Box<dyn FavoritesStorage>,
}

impl FavoritesStore {
    /// Create a store, loading whatever valid favorites `storage` holds
    pub fn load(storage: impl FavoritesStorage + 'static) -> Self {
        let favorites = load_favorites(&storage);
        Self {
            favorites,
            storage: Box::new(storage),
        }
    }

    pub fn favorites(&self) -> &[DogImage] {
        &self.favorites
    }

    pub fn is_favorited(&self, url: &str) -> bool {
        self.favorites.iter().any(|fav| fav.url == url)
    }

    /// Append `dog` unless its URL is already a favorite
    pub fn add(&mut self, dog: DogImage) -> bool {
        if self.is_favorited(&dog.url) {
            log::debug!("Already a favorite: {}", dog.url);
            return false;
        }

        log::info!("Adding favorite: {} ({})", dog.breed, dog.url);
        self.favorites.push(dog);
        self.persist();
        true
    }

    /// Remove every favorite with the URL of `dog`; `true` if any was removed
    pub fn remove_dog(&mut self, dog: &DogImage) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|fav| fav.url != dog.url);

        if self.favorites.len() < before {
            log::info!("Removed favorite: {}", dog.url);
            self.persist();
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Write the full list to storage
    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.favorites) {
            Ok(serialized) => serialized,
            Err(e) => {
                log::warn!("Failed to serialize favorites: {}", e);
                return;
            }
        };

        match self.storage.write(&serialized) {
            Ok(()) => log::debug!("Saved {} favorites", self.favorites.len()),
            Err(e) => log::warn!("Failed to save favorites: {}", e),
        }
    }
}

/// Read and validate stored favorites; any failure yields an empty list
fn load_favorites(storage: &dyn FavoritesStorage) -> Vec<DogImage> {
    let content = match storage.read() {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::info!("No stored favorites, starting empty");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Failed to load favorites, starting empty: {}", e);
            return Vec::new();
        }
    };

    let parsed: serde_json::Value = match serde_json::from_str(&content) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Failed to parse stored favorites, starting empty: {}", e);
            return Vec::new();
        }
    };

    let serde_json::Value::Array(items) = parsed else {
        log::warn!("Stored favorites are not a list, ignoring them");
        return Vec::new();
    };

    let total = items.len();
    let mut seen = HashSet::new();
    let favorites: Vec<DogImage> = items
        .into_iter()
        .filter_map(validate_entry)
        .filter(|dog| seen.insert(dog.url.clone()))
        .collect();

    if favorites.len() < total {
        log::debug!(
            "Dropped {} invalid or duplicate stored favorite(s)",
            total - favorites.len()
        );
    }
    log::info!("Loaded {} favorites from storage", favorites.len());
    favorites
}

/// An entry is valid when it is an object with string `url` and `breed`
fn validate_entry(item: serde_json::Value) -> Option<DogImage> {
    let url = item.get("url")?.as_str()?;
    let breed = item.get("breed")?.as_str()?;
    Some(DogImage::new(url, breed))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
