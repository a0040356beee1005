use datadb::{LocatorError, NoBackupReason};

use crate::helpers::testroot::TestRoot;

#[test]
fn missing_profile_is_no_backup() {
    let root = TestRoot::new();
    match root.locator().latest_backup("ghost") {
        Err(LocatorError::NoBackup { profile, reason }) => {
            assert_eq!(profile, "ghost");
            assert_eq!(reason, NoBackupReason::ProfileMissing);
        }
        other => panic!("expected NoBackup, got {other:?}"),
    }
}

#[test]
fn profile_without_data_dir_is_no_backup() {
    let root = TestRoot::new();
    std::fs::create_dir_all(root.path().join("pg")).unwrap();
    let err = root.locator().latest_backup("pg").unwrap_err();
    assert!(matches!(
        err,
        LocatorError::NoBackup { reason: NoBackupReason::ProfileMissing, .. }
    ));
}

#[test]
fn empty_data_dir_is_no_backup() {
    let root = TestRoot::new();
    root.empty_profile("pg");
    let err = root.locator().latest_backup("pg").unwrap_err();
    assert!(matches!(err, LocatorError::NoBackup { reason: NoBackupReason::Empty, .. }));
    assert!(err.is_no_backup());
    assert_eq!(datadb::errors::id_str(err.id()), "E_NO_BACKUP");
}

#[test]
fn first_backup_makes_profile_resolvable() {
    let root = TestRoot::new();
    root.empty_profile("pg");
    let loc = root.locator();
    assert!(loc.latest_backup("pg").unwrap_err().is_no_backup());
    root.snapshot("pg", "2023-01-01T00:00:00.000000");
    assert!(loc.latest_backup("pg").is_ok());
}

#[test]
fn profile_path_that_is_a_file_is_io_not_no_backup() {
    let root = TestRoot::new();
    std::fs::write(root.path().join("pg"), b"not a directory").unwrap();
    let err = root.locator().latest_backup("pg").unwrap_err();
    assert!(matches!(err, LocatorError::Io { .. }), "{err:?}");
    assert_eq!(datadb::errors::id_str(err.id()), "E_IO");
}
