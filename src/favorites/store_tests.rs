//! Unit tests for the favorites store.

use super::FavoritesStore;
use crate::error::{StorageError, StorageResult};
use crate::favorites::storage::{FavoritesStorage, MemoryStorage};
use crate::models::DogImage;

fn husky() -> DogImage {
    DogImage::new("https://images.dog.ceo/breeds/husky/1.jpg", "Husky")
}

fn pug() -> DogImage {
    DogImage::new("https://images.dog.ceo/breeds/pug/2.jpg", "Pug")
}

/// Storage that can never be read or written
struct BrokenStorage;

impl FavoritesStorage for BrokenStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn write(&self, _contents: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }
}

fn stored_favorites(storage: &MemoryStorage) -> Vec<DogImage> {
    let contents = storage.contents().expect("nothing was written");
    serde_json::from_str(&contents).unwrap()
}

mod mutation_tests {
    use super::*;

    #[test]
    fn add_appends_and_reports_true() {
        let mut store = FavoritesStore::load(MemoryStorage::new());

        assert!(store.add(husky()));
        assert!(store.add(pug()));

        assert_eq!(store.favorites(), &[husky(), pug()]);
        assert!(store.is_favorited(&husky().url));
    }

    #[test]
    fn adding_twice_is_a_no_op() {
        let mut store = FavoritesStore::load(MemoryStorage::new());

        assert!(store.add(husky()));
        assert!(!store.add(husky()));

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_url_with_other_breed_counts_as_duplicate() {
        let mut store = FavoritesStore::load(MemoryStorage::new());

        store.add(husky());
        let relabelled = DogImage::new(husky().url, "Something Else");

        assert!(!store.add(relabelled));
        assert_eq!(store.favorites()[0].breed, "Husky");
    }

    #[test]
    fn add_then_remove_round_trip() {
        let mut store = FavoritesStore::load(MemoryStorage::new());

        store.add(husky());
        assert!(store.remove_dog(&husky()));

        assert!(store.is_empty());
        assert!(!store.is_favorited(&husky().url));
    }

    #[test]
    fn removing_unknown_dog_returns_false() {
        let mut store = FavoritesStore::load(MemoryStorage::new());
        store.add(husky());

        assert!(!store.remove_dog(&pug()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_matches_by_url_only() {
        let mut store = FavoritesStore::load(MemoryStorage::new());
        store.add(husky());

        assert!(store.remove_dog(&DogImage::new(husky().url, "")));
        assert!(store.is_empty());
    }

    #[test]
    fn removal_keeps_order_of_remaining() {
        let mut store = FavoritesStore::load(MemoryStorage::new());
        let beagle = DogImage::new("https://images.dog.ceo/breeds/beagle/3.jpg", "Beagle");
        store.add(husky());
        store.add(pug());
        store.add(beagle.clone());

        store.remove_dog(&pug());

        assert_eq!(store.favorites(), &[husky(), beagle]);
    }
}

mod persistence_tests {
    use super::*;

    #[test]
    fn every_mutation_writes_full_list() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(storage.clone());

        store.add(husky());
        assert_eq!(stored_favorites(&storage), vec![husky()]);

        store.add(pug());
        assert_eq!(stored_favorites(&storage), vec![husky(), pug()]);

        store.remove_dog(&husky());
        assert_eq!(stored_favorites(&storage), vec![pug()]);

        store.remove_dog(&pug());
        assert!(stored_favorites(&storage).is_empty());
    }

    #[test]
    fn no_op_mutations_do_not_write() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(storage.clone());

        store.remove_dog(&husky());
        assert!(storage.contents().is_none());
    }

    #[test]
    fn written_payload_is_list_of_url_and_breed() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(storage.clone());
        store.add(DogImage::new("a", "X"));

        let value: serde_json::Value =
            serde_json::from_str(&storage.contents().unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([{ "url": "a", "breed": "X" }]));
    }

    #[test]
    fn write_failure_keeps_memory_state() {
        let mut store = FavoritesStore::load(BrokenStorage);

        assert!(store.add(husky()));
        assert!(store.is_favorited(&husky().url));

        assert!(store.remove_dog(&husky()));
        assert!(store.is_empty());
    }
}

mod load_tests {
    use super::*;

    #[test]
    fn empty_storage_loads_empty() {
        let store = FavoritesStore::load(MemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn drops_invalid_entries() {
        let storage = MemoryStorage::with_contents(r#"[{"url":"a","breed":"X"},{"not":"valid"}]"#);
        let store = FavoritesStore::load(storage);

        assert_eq!(store.favorites(), &[DogImage::new("a", "X")]);
    }

    #[test]
    fn drops_entries_with_wrong_field_types() {
        let storage = MemoryStorage::with_contents(
            r#"[null, 5, "a", {"url":1,"breed":"X"}, {"url":"b","breed":null},
                {"url":"c","breed":"Y","extra":true}]"#,
        );
        let store = FavoritesStore::load(storage);

        assert_eq!(store.favorites(), &[DogImage::new("c", "Y")]);
    }

    #[test]
    fn corrupt_payload_loads_empty() {
        let storage = MemoryStorage::with_contents("{not json at all");
        let store = FavoritesStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn non_list_payload_is_discarded() {
        let storage = MemoryStorage::with_contents(r#"{"url":"a","breed":"X"}"#);
        let store = FavoritesStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_urls_keep_first_entry() {
        let storage = MemoryStorage::with_contents(
            r#"[{"url":"a","breed":"X"},{"url":"b","breed":"Y"},{"url":"a","breed":"Z"}]"#,
        );
        let store = FavoritesStore::load(storage);

        assert_eq!(
            store.favorites(),
            &[DogImage::new("a", "X"), DogImage::new("b", "Y")]
        );
    }

    #[test]
    fn unreadable_storage_loads_empty_and_stays_usable() {
        let mut store = FavoritesStore::load(BrokenStorage);
        assert!(store.is_empty());
        assert!(store.add(pug()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn loaded_favorites_are_kept_on_next_write() {
        let storage = MemoryStorage::with_contents(r#"[{"url":"a","breed":"X"}]"#);
        let mut store = FavoritesStore::load(storage.clone());

        store.add(husky());

        assert_eq!(
            stored_favorites(&storage),
            vec![DogImage::new("a", "X"), husky()]
        );
    }
}
