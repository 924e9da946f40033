//! Viewer session: the current batch of dogs, the selected one, and
//! favorite actions on it.

use rand::Rng;

use crate::api::DogApiClient;
use crate::error::DogApiResult;
use crate::favorites::FavoritesStore;
use crate::models::DogImage;

/// Number of images fetched per refresh
pub const DEFAULT_BATCH_SIZE: u32 = 10;

pub struct DogViewer {
    api: DogApiClient,
    favorites: FavoritesStore,
    batch_size: u32,
    images: Vec<DogImage>,
    selected: Option<DogImage>,
}

impl DogViewer {
    pub fn new(api: DogApiClient, favorites: FavoritesStore) -> Self {
        Self {
            api,
            favorites,
            batch_size: DEFAULT_BATCH_SIZE,
            images: Vec::new(),
            selected: None,
        }
    }

    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Fetch a new batch and select a random dog from it
    pub async fn refresh(&mut self) -> DogApiResult<&[DogImage]> {
        self.refresh_with(pick_random).await
    }

    /// Fetch a new batch, then let `pick` choose the index to select
    ///
    /// The selection is cleared before fetching. On failure the previous
    /// batch is kept.
    pub async fn refresh_with<F>(&mut self, pick: F) -> DogApiResult<&[DogImage]>
    where
        F: FnOnce(&[DogImage]) -> Option<usize>,
    {
        self.selected = None;
        self.images = self.api.get_random_dogs(self.batch_size).await?;

        self.selected = pick(&self.images).and_then(|index| self.images.get(index).cloned());
        if let Some(dog) = &self.selected {
            log::debug!("Selected {} ({})", dog.breed, dog.url);
        }

        Ok(&self.images)
    }

    pub fn images(&self) -> &[DogImage] {
        &self.images
    }

    pub fn selected(&self) -> Option<&DogImage> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, dog: DogImage) {
        self.selected = Some(dog);
    }

    /// The dog to display: the selected one, else the first of the batch
    pub fn main_dog(&self) -> Option<&DogImage> {
        self.selected.as_ref().or_else(|| self.images.first())
    }

    pub fn is_current_favorited(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|dog| self.favorites.is_favorited(&dog.url))
    }

    pub fn add_current_to_favorites(&mut self) -> bool {
        match &self.selected {
            Some(dog) => self.favorites.add(dog.clone()),
            None => false,
        }
    }

    pub fn remove_current_from_favorites(&mut self) -> bool {
        match &self.selected {
            Some(dog) => self.favorites.remove_dog(dog),
            None => false,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }
}

/// Uniformly random index into `images`
pub fn pick_random(images: &[DogImage]) -> Option<usize> {
    if images.is_empty() {
        return None;
    }
    Some(rand::thread_rng().gen_range(0..images.len()))
}
