use serde::{Deserialize, Serialize};

/// A dog picture returned by the Dog API
///
/// `url` identifies the image; `breed` is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DogImage {
    pub url: String,
    pub breed: String,
}

impl DogImage {
    pub fn new(url: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            breed: breed.into(),
        }
    }

    /// Build an image record from its URL, deriving the breed label
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let breed = crate::api::dog_ceo::extract_breed_from_url(&url);
        Self { url, breed }
    }
}
