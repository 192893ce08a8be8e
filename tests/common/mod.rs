//! Helpers for integration tests.

use std::io::Write;

use farm_easy::repository::InMemoryRepository;
use tempfile::NamedTempFile;

/// Seed shipped with the service: two active listings, two categories, two sellers.
pub const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.json");

/// Catalog seed written to a temporary file.
pub struct TestCatalog {
    tempfile: NamedTempFile,
}

impl TestCatalog {
    pub fn new(json: &str) -> Self {
        let mut tempfile = NamedTempFile::new().expect("Failed to create temp file");
        tempfile
            .write_all(json.as_bytes())
            .expect("Failed to write catalog seed");
        TestCatalog { tempfile }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_CATALOG)
    }

    pub fn path(&self) -> &std::path::Path {
        self.tempfile.path()
    }

    pub fn repository(&self) -> InMemoryRepository {
        InMemoryRepository::from_json_file(self.path()).expect("Failed to load catalog seed")
    }
}
