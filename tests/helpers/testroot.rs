// tests/helpers/testroot.rs
// Per-test backup root with builders for the profile/snapshot layout.

use std::path::{Path, PathBuf};

use datadb::config::LocatorConfig;
use datadb::BackupLocator;

#[derive(Debug)]
pub struct TestRoot {
    td: tempfile::TempDir,
}

impl TestRoot {
    pub fn new() -> Self {
        Self { td: tempfile::TempDir::new().expect("tempdir") }
    }
    pub fn path(&self) -> &Path {
        self.td.path()
    }
    pub fn config(&self) -> LocatorConfig {
        LocatorConfig::new(self.path()).with_tmp(self.path().join("tmp"))
    }
    pub fn locator(&self) -> BackupLocator {
        BackupLocator::with_config(self.config())
    }
    /// `{root}/{profile}/data`, created empty.
    pub fn empty_profile(&self, profile: &str) -> PathBuf {
        let p = self.path().join(profile).join("data");
        std::fs::create_dir_all(&p).unwrap();
        p
    }
    /// `{root}/{profile}/data/{name}/data` with one payload file.
    pub fn snapshot(&self, profile: &str, name: &str) -> PathBuf {
        let p = self.path().join(profile).join("data").join(name).join("data");
        std::fs::create_dir_all(&p).unwrap();
        std::fs::write(p.join("payload"), name.as_bytes()).unwrap();
        p
    }
    /// A snapshot directory without its inner `data` directory.
    pub fn bare_entry(&self, profile: &str, name: &str) -> PathBuf {
        let p = self.path().join(profile).join("data").join(name);
        std::fs::create_dir_all(&p).unwrap();
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testroot_unique() {
        let a = TestRoot::new();
        let b = TestRoot::new();
        assert_ne!(a.path(), b.path());
        let p = a.snapshot("pg", "2023-01-01T00:00:00.000000");
        assert!(p.join("payload").exists());
        assert!(!b.path().join("pg").exists());
    }
}
