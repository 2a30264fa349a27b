//! Customer service
//!
//! Registration and listing of customers; no invariant logic.

use crate::error::{CorralError, CorralResult};
use crate::models::Customer;
use crate::storage::Storage;

/// Service for customer registration and listing
pub struct CustomerService<'a> {
    storage: &'a Storage,
}

impl<'a> CustomerService<'a> {
    /// Create a new customer service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new customer. The repository assigns the id.
    pub fn register(&self, full_name: &str) -> CorralResult<Customer> {
        let customer = Customer::new(full_name.trim());
        customer.validate().map_err(CorralError::Validation)?;

        let customer = self.storage.customers.save(customer)?;
        self.storage.customers.persist()?;

        Ok(customer)
    }

    /// Get all registered customers
    pub fn list_all(&self) -> CorralResult<Vec<Customer>> {
        self.storage.customers.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CorralPaths;
    use crate::models::CustomerId;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CorralPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_customer() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        let customer = service.register("Ana García").unwrap();
        assert_eq!(customer.id, Some(CustomerId::from(1)));
        assert_eq!(customer.full_name, "Ana García");
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        let err = service.register("  ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.customers.count().unwrap(), 0);
    }

    #[test]
    fn test_list_all() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        service.register("Ana García").unwrap();
        service.register("Luis Pérez").unwrap();

        let customers = service.list_all().unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].full_name, "Ana García");
        assert_eq!(customers[1].full_name, "Luis Pérez");
    }
}
