//! API clients for external services (Dog CEO)

pub mod dog_ceo;

pub use dog_ceo::{extract_breed_from_url, DogApiClient, RetryPolicy, DOG_API_BASE};
