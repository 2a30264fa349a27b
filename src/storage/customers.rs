//! Customer repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CorralError, CorralResult};
use crate::models::{Customer, CustomerId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable customer data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CustomerData {
    customers: Vec<Customer>,
}

#[derive(Debug)]
struct CustomerStore {
    customers: HashMap<CustomerId, Customer>,
    next_id: u64,
}

/// Repository for customer persistence
pub struct CustomerRepository {
    path: PathBuf,
    data: RwLock<CustomerStore>,
}

impl CustomerRepository {
    /// Create a new customer repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(CustomerStore {
                customers: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Load customers from disk and rebuild the id counter
    pub fn load(&self) -> CorralResult<()> {
        let file_data: CustomerData = read_json(&self.path)?;

        let mut store = self
            .data
            .write()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        store.customers.clear();
        store.next_id = 1;
        for customer in file_data.customers {
            if let Some(id) = customer.id {
                if id.value() >= store.next_id {
                    store.next_id = id.value() + 1;
                }
                store.customers.insert(id, customer);
            }
        }

        Ok(())
    }

    /// Write all customers back to disk
    pub fn persist(&self) -> CorralResult<()> {
        let customers = self.get_all()?;
        write_json_atomic(&self.path, &CustomerData { customers })
    }

    /// Save a customer, assigning the next id if it has none (permissive
    /// upsert otherwise, like the other repositories)
    pub fn save(&self, mut customer: Customer) -> CorralResult<Customer> {
        let mut store = self
            .data
            .write()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = match customer.id {
            Some(id) => id,
            None => {
                let id = CustomerId::from(store.next_id);
                customer.id = Some(id);
                id
            }
        };

        if id.value() >= store.next_id {
            store.next_id = id.value() + 1;
        }

        store.customers.insert(id, customer.clone());
        Ok(customer)
    }

    /// Get a customer by ID
    pub fn get(&self, id: CustomerId) -> CorralResult<Option<Customer>> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(store.customers.get(&id).cloned())
    }

    /// Get all customers in id (insertion) order
    pub fn get_all(&self) -> CorralResult<Vec<Customer>> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut customers: Vec<_> = store.customers.values().cloned().collect();
        customers.sort_by_key(|c| c.id);
        Ok(customers)
    }

    /// Count customers
    pub fn count(&self) -> CorralResult<usize> {
        let store = self
            .data
            .read()
            .map_err(|e| CorralError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(store.customers.len())
    }
}
