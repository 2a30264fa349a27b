//! Animal repository for JSON storage
//!
//! Owns the animal records and the monotonic counter that assigns their ids.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CorralError, CorralResult};
use crate::models::{Animal, AnimalId, AnimalStatus};

use super::file_io::{read_json, write_json_atomic};

/// Serializable animal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AnimalData {
    animals: Vec<Animal>,
}

#[derive(Debug)]
struct AnimalStore {
    animals: HashMap<AnimalId, Animal>,
    next_id: u64,
}

/// Repository for animal persistence
pub struct AnimalRepository {
    path: PathBuf,
    data: RwLock<AnimalStore>,
}

impl AnimalRepository {
    /// Create a new animal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(AnimalStore {
                animals: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Load animals from disk and rebuild the id counter
    pub fn load(&self) -> CorralResult<()> {
        let file_data: AnimalData = read_json(&self.path)?;

        let mut store = self
            .data
            .write()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        store.animals.clear();
        store.next_id = 1;
        for animal in file_data.animals {
            if let Some(id) = animal.id {
                if id.value() >= store.next_id {
                    store.next_id = id.value() + 1;
                }
                store.animals.insert(id, animal);
            }
        }

        Ok(())
    }

    /// Write all animals back to disk
    pub fn persist(&self) -> CorralResult<()> {
        let animals = self.get_all()?;
        write_json_atomic(&self.path, &AnimalData { animals })
    }

    /// Save an animal. An animal without an id is assigned the next one and
    /// inserted; an animal with an id replaces the record with that id, or is
    /// inserted if no such record exists (permissive upsert).
    pub fn save(&self, mut animal: Animal) -> CorralResult<Animal> {
        let mut store = self
            .data
            .write()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = match animal.id {
            Some(id) => id,
            None => {
                let id = AnimalId::from(store.next_id);
                animal.id = Some(id);
                id
            }
        };

        // Keep the counter ahead of any externally supplied id
        if id.value() >= store.next_id {
            store.next_id = id.value() + 1;
        }

        store.animals.insert(id, animal.clone());
        Ok(animal)
    }

    /// Get an animal by ID
    pub fn get(&self, id: AnimalId) -> CorralResult<Option<Animal>> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(store.animals.get(&id).cloned())
    }

    /// Get all animals in id (insertion) order
    pub fn get_all(&self) -> CorralResult<Vec<Animal>> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut animals: Vec<_> = store.animals.values().cloned().collect();
        animals.sort_by_key(|a| a.id);
        Ok(animals)
    }

    /// Get animals whose status matches the requested one
    pub fn get_by_status(&self, status: AnimalStatus) -> CorralResult<Vec<Animal>> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|a| a.status == status).collect())
    }

    /// Count animals
    pub fn count(&self) -> CorralResult<usize> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(store.animals.len())
    }
}
