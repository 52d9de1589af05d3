//! Repository Tests
//!
//! Tests for SlotRepository backed by MemoryStorage.

#[cfg(test)]
mod tests {
    use crate::config::{StoreConfig, DEFAULT_STORAGE_KEY};
    use crate::domain::Project;
    use crate::repository::{
        KeyValueStorage, MemoryStorage, ProjectRepository, SlotRepository, StorageError,
    };

    const KEY: &str = DEFAULT_STORAGE_KEY;

    fn setup_repo() -> (SlotRepository<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (SlotRepository::new(storage.clone(), KEY), storage)
    }

    /// Backend whose every operation is refused
    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Backend("SecurityError".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_load_empty_storage() {
        let (repo, _) = setup_repo();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (repo, _) = setup_repo();
        let projects = vec![
            Project::fixture("a", "Alpha", "first", 1),
            Project::fixture("b", "Beta", "", 2),
            Project::create("Gamma", "third"),
        ];

        repo.save(&projects);

        assert_eq!(repo.load(), projects);
    }

    #[test]
    fn test_save_is_idempotent() {
        let (repo, storage) = setup_repo();
        let projects = vec![Project::fixture("a", "Alpha", "first", 1)];

        repo.save(&projects);
        let once = storage.raw(KEY);
        repo.save(&projects);

        assert_eq!(storage.raw(KEY), once);
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_save_writes_json_array() {
        let (repo, storage) = setup_repo();
        repo.save(&[Project::fixture("a", "Alpha", "desc", 7)]);

        let raw = storage.raw(KEY).expect("value stored");
        assert_eq!(
            raw,
            r#"[{"id":"a","title":"Alpha","description":"desc","createdAt":7}]"#
        );
    }

    #[test]
    fn test_load_existing_browser_data() {
        let storage = MemoryStorage::with_item(
            KEY,
            r#"[{"id":"1b4e28ba-2fa1-11d2-883f-0016d3cca427","title":"Site","description":"redesign","createdAt":1717686537151}]"#,
        );
        let repo = SlotRepository::new(storage, KEY);

        let projects = repo.load();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title(), "Site");
        assert_eq!(projects[0].created_at(), 1717686537151);
    }

    #[test]
    fn test_load_corrupt_data_is_empty() {
        for raw in ["{not json", "{\"id\":\"a\"}", "[{\"title\":\"no id\"}]", "42", ""] {
            let repo = SlotRepository::new(MemoryStorage::with_item(KEY, raw), KEY);
            assert!(repo.load().is_empty(), "expected empty for {raw:?}");
        }
    }

    #[test]
    fn test_corrupt_data_replaced_on_save() {
        let storage = MemoryStorage::with_item(KEY, "garbage");
        let repo = SlotRepository::new(storage.clone(), KEY);
        let projects = vec![Project::fixture("a", "Alpha", "", 1)];

        repo.save(&projects);

        assert_eq!(repo.load(), projects);
    }

    #[test]
    fn test_detached_repo_degrades() {
        let repo = SlotRepository::<MemoryStorage>::detached(KEY);
        repo.save(&[Project::fixture("a", "Alpha", "", 1)]);
        assert!(repo.load().is_empty());
        assert!(repo.storage().is_none());
    }

    #[test]
    fn test_backend_failures_are_swallowed() {
        let repo = SlotRepository::new(FailingStorage, KEY);
        repo.save(&[Project::fixture("a", "Alpha", "", 1)]);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_from_config_uses_configured_key() {
        let storage = MemoryStorage::new();
        let config = StoreConfig { storage_key: "tracker.v1".into() };
        let repo = SlotRepository::from_config(Some(storage.clone()), &config);

        repo.save(&[Project::fixture("a", "Alpha", "", 1)]);

        assert_eq!(repo.key(), "tracker.v1");
        assert!(storage.raw("tracker.v1").is_some());
        assert!(storage.raw(KEY).is_none());
    }

    #[test]
    fn test_slots_are_independent() {
        let storage = MemoryStorage::new();
        let first = SlotRepository::new(storage.clone(), "one");
        let second = SlotRepository::new(storage.clone(), "two");

        first.save(&[Project::fixture("a", "Alpha", "", 1)]);

        assert_eq!(first.load().len(), 1);
        assert!(second.load().is_empty());
    }
}
