//! Animal service
//!
//! Registration and listing of rentable animals. Carries no invariant
//! logic; status transitions belong to the rental service.

use crate::error::{CorralError, CorralResult};
use crate::models::{Animal, AnimalStatus, AnimalType};
use crate::storage::Storage;

/// Service for animal registration and listing
pub struct AnimalService<'a> {
    storage: &'a Storage,
}

impl<'a> AnimalService<'a> {
    /// Create a new animal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new animal. Every new animal starts out available; the
    /// repository assigns its id.
    pub fn register(&self, name: &str, animal_type: AnimalType) -> CorralResult<Animal> {
        let animal = Animal::new(name.trim(), animal_type);
        animal.validate().map_err(CorralError::Validation)?;

        let animal = self.storage.animals.save(animal)?;
        self.storage.animals.persist()?;

        Ok(animal)
    }

    /// Get all registered animals
    pub fn list_all(&self) -> CorralResult<Vec<Animal>> {
        self.storage.animals.get_all()
    }

    /// Get only the animals currently available for rental
    pub fn list_available(&self) -> CorralResult<Vec<Animal>> {
        self.storage.animals.get_by_status(AnimalStatus::Available)
    }
}
