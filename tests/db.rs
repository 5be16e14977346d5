use ecom_synth::db::{open_store, rebuild_store};
use ecom_synth::repository::errors::RepositoryError;
use ecom_synth::repository::{DatasetReader, DatasetWriter, DieselRepository};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let dir;
    {
        let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        assert!(test_db.path().is_file());
        dir = test_db.dir().to_path_buf();
    }

    assert!(!dir.exists());
}

#[test]
fn test_rebuild_discards_previous_store() {
    let test_db = common::TestDb::new("test_rebuild_discards_previous_store.db");
    let dataset = common::spending_dataset();
    test_db
        .repo()
        .insert_categories(&dataset.categories)
        .unwrap();

    let repo = DieselRepository::new(rebuild_store(test_db.path()).unwrap());

    assert!(repo.read_dataset().unwrap().categories.is_empty());
}

#[test]
fn test_open_store_requires_existing_file() {
    let test_db = common::TestDb::new("test_open_store_requires_existing_file.db");
    let missing = test_db.dir().join("missing.db");

    assert!(open_store(test_db.path()).is_ok());
    let err = open_store(&missing).unwrap_err();
    assert!(matches!(err, RepositoryError::StoreMissing(_)));
    assert!(!missing.exists());
}
