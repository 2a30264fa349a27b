//! Storage layer for corral
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each entity kind gets its own repository owning an id-to-entity
//! map and the monotonic counter that assigns ids.

pub mod animals;
pub mod customers;
pub mod file_io;
pub mod rentals;

pub use animals::AnimalRepository;
pub use customers::CustomerRepository;
pub use file_io::{read_json, write_json_atomic};
pub use rentals::RentalRepository;

use crate::config::paths::CorralPaths;
use crate::error::CorralResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CorralPaths,
    pub animals: AnimalRepository,
    pub customers: CustomerRepository,
    pub rentals: RentalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CorralPaths) -> CorralResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            animals: AnimalRepository::new(paths.animals_file()),
            customers: CustomerRepository::new(paths.customers_file()),
            rentals: RentalRepository::new(paths.rentals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CorralPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> CorralResult<()> {
        self.animals.load()?;
        self.customers.load()?;
        self.rentals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn persist_all(&self) -> CorralResult<()> {
        self.animals.persist()?;
        self.customers.persist()?;
        self.rentals.persist()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CorralPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.animals.count().unwrap(), 0);
    }
}
