//! Rental repository for JSON storage
//!
//! Besides the usual lookups this repository answers the availability
//! question the rental service cares about: which open rentals reference a
//! given animal.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CorralError, CorralResult};
use crate::models::{AnimalId, Rental, RentalId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable rental data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RentalData {
    rentals: Vec<Rental>,
}

#[derive(Debug)]
struct RentalStore {
    rentals: HashMap<RentalId, Rental>,
    next_id: u64,
}

/// Repository for rental persistence
pub struct RentalRepository {
    path: PathBuf,
    data: RwLock<RentalStore>,
}

impl RentalRepository {
    /// Create a new rental repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(RentalStore {
                rentals: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Load rentals from disk and rebuild the id counter
    pub fn load(&self) -> CorralResult<()> {
        let file_data: RentalData = read_json(&self.path)?;

        let mut store = self
            .data
            .write()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        store.rentals.clear();
        store.next_id = 1;
        for rental in file_data.rentals {
            if let Some(id) = rental.id {
                if id.value() >= store.next_id {
                    store.next_id = id.value() + 1;
                }
                store.rentals.insert(id, rental);
            }
        }

        Ok(())
    }

    /// Write all rentals back to disk
    pub fn persist(&self) -> CorralResult<()> {
        let rentals = self.get_all()?;
        write_json_atomic(&self.path, &RentalData { rentals })
    }

    /// Save a rental, assigning the next id if it has none (permissive
    /// upsert otherwise)
    pub fn save(&self, mut rental: Rental) -> CorralResult<Rental> {
        let mut store = self
            .data
            .write()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = match rental.id {
            Some(id) => id,
            None => {
                let id = RentalId::from(store.next_id);
                rental.id = Some(id);
                id
            }
        };

        if id.value() >= store.next_id {
            store.next_id = id.value() + 1;
        }

        store.rentals.insert(id, rental.clone());
        Ok(rental)
    }

    /// Get a rental by ID
    pub fn get(&self, id: RentalId) -> CorralResult<Option<Rental>> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(store.rentals.get(&id).cloned())
    }

    /// Get all rentals in id (insertion) order
    pub fn get_all(&self) -> CorralResult<Vec<Rental>> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut rentals: Vec<_> = store.rentals.values().cloned().collect();
        rentals.sort_by_key(|r| r.id);
        Ok(rentals)
    }

    /// Get open rentals (no end time) referencing the given animal
    pub fn get_active_by_animal(&self, animal_id: AnimalId) -> CorralResult<Vec<Rental>> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|r| r.animal_id == animal_id && r.is_active())
            .collect())
    }

    /// Count rentals
    pub fn count(&self) -> CorralResult<usize> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(store.rentals.len())
    }
}
