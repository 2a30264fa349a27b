//! Rental service
//!
//! The business core of corral. Enforces the rental lifecycle across
//! animals, customers, and rentals: an animal can be out on at most one
//! active rental, and finishing a rental is a one-way, idempotent
//! transition.

use chrono::Utc;

use crate::error::{CorralError, CorralResult};
use crate::models::{AnimalId, AnimalStatus, CustomerId, Rental, RentalId, RentalType};
use crate::storage::Storage;

/// Service for the rental lifecycle
pub struct RentalService<'a> {
    storage: &'a Storage,
}

impl<'a> RentalService<'a> {
    /// Create a new rental service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Start a rental for an animal and customer.
    ///
    /// Checks, in order: the animal exists, the animal is available, the
    /// customer exists. A failed check leaves every store untouched. On
    /// success the new rental is recorded before the animal is flipped to
    /// `Rented`; both in-memory mutations complete before anything is
    /// written to disk.
    pub fn start(
        &self,
        animal_id: AnimalId,
        customer_id: CustomerId,
        rental_type: RentalType,
    ) -> CorralResult<Rental> {
        let mut animal = self
            .storage
            .animals
            .get(animal_id)?
            .ok_or_else(|| CorralError::animal_not_found(animal_id))?;

        if animal.status != AnimalStatus::Available {
            return Err(CorralError::AnimalNotAvailable { id: animal_id });
        }

        // Existence is all that matters; customers carry no state to check
        self.storage
            .customers
            .get(customer_id)?
            .ok_or_else(|| CorralError::customer_not_found(customer_id))?;

        let rental = self
            .storage
            .rentals
            .save(Rental::new(animal_id, customer_id, rental_type))?;

        animal.status = AnimalStatus::Rented;
        self.storage.animals.save(animal)?;

        self.storage.rentals.persist()?;
        self.storage.animals.persist()?;

        Ok(rental)
    }

    /// Finish a rental, returning the animal to the available pool.
    ///
    /// Finishing an already-finished rental is a no-op that returns the
    /// rental unchanged, so callers can safely retry.
    pub fn finish(&self, rental_id: RentalId) -> CorralResult<Rental> {
        let mut rental = self
            .storage
            .rentals
            .get(rental_id)?
            .ok_or_else(|| CorralError::rental_not_found(rental_id))?;

        if rental.end_time.is_some() {
            return Ok(rental);
        }

        rental.end_time = Some(Utc::now());

        let mut animal = self
            .storage
            .animals
            .get(rental.animal_id)?
            .ok_or_else(|| CorralError::animal_not_found(rental.animal_id))?;
        animal.status = AnimalStatus::Available;
        self.storage.animals.save(animal)?;

        let rental = self.storage.rentals.save(rental)?;

        self.storage.animals.persist()?;
        self.storage.rentals.persist()?;

        Ok(rental)
    }

    /// Get every rental ever created, in insertion order
    pub fn list_all(&self) -> CorralResult<Vec<Rental>> {
        self.storage.rentals.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CorralPaths;
    use crate::models::{Animal, AnimalType, Customer};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CorralPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_animal(storage: &Storage, name: &str) -> AnimalId {
        let animal = storage.animals.save(Animal::new(name, AnimalType::Horse)).unwrap();
        animal.id.unwrap()
    }

    fn add_customer(storage: &Storage, name: &str) -> CustomerId {
        let customer = storage.customers.save(Customer::new(name)).unwrap();
        customer.id.unwrap()
    }

    #[test]
    fn test_start_rental_marks_animal_rented() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let animal_id = add_animal(&storage, "Trueno");
        let customer_id = add_customer(&storage, "Ana");

        let rental = service
            .start(animal_id, customer_id, RentalType::ShortRide)
            .unwrap();

        assert_eq!(rental.id, Some(RentalId::from(1)));
        assert_eq!(rental.animal_id, animal_id);
        assert_eq!(rental.customer_id, customer_id);
        assert!(rental.is_active());

        let animal = storage.animals.get(animal_id).unwrap().unwrap();
        assert_eq!(animal.status, AnimalStatus::Rented);
    }

    #[test]
    fn test_start_rental_animal_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let customer_id = add_customer(&storage, "Ana");

        let err = service
            .start(AnimalId::from(99), customer_id, RentalType::Hourly)
            .unwrap_err();

        assert!(matches!(
            err,
            CorralError::NotFound {
                entity_type: "Animal",
                ..
            }
        ));
        assert_eq!(storage.rentals.count().unwrap(), 0);
    }

    #[test]
    fn test_start_rental_customer_not_found_mutates_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let animal_id = add_animal(&storage, "Trueno");

        let err = service
            .start(animal_id, CustomerId::from(99), RentalType::Hourly)
            .unwrap_err();

        assert!(matches!(
            err,
            CorralError::NotFound {
                entity_type: "Customer",
                ..
            }
        ));

        // The animal must still be available and no rental recorded
        let animal = storage.animals.get(animal_id).unwrap().unwrap();
        assert_eq!(animal.status, AnimalStatus::Available);
        assert_eq!(storage.rentals.count().unwrap(), 0);
    }

    #[test]
    fn test_start_rental_rejects_rented_animal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let animal_id = add_animal(&storage, "Trueno");
        let ana = add_customer(&storage, "Ana");
        let luis = add_customer(&storage, "Luis");

        service.start(animal_id, ana, RentalType::ShortRide).unwrap();

        let err = service
            .start(animal_id, luis, RentalType::Hourly)
            .unwrap_err();

        assert!(matches!(
            err,
            CorralError::AnimalNotAvailable { id } if id == animal_id
        ));

        // Only the first rental exists
        assert_eq!(storage.rentals.count().unwrap(), 1);
        let active = storage.rentals.get_active_by_animal(animal_id).unwrap();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_finish_rental_returns_animal_to_available() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let animal_id = add_animal(&storage, "Trueno");
        let customer_id = add_customer(&storage, "Ana");

        let rental = service
            .start(animal_id, customer_id, RentalType::ShortRide)
            .unwrap();

        let finished = service.finish(rental.id.unwrap()).unwrap();
        assert!(finished.end_time.is_some());
        assert!(!finished.is_active());
        assert_eq!(finished.start_time, rental.start_time);

        let animal = storage.animals.get(animal_id).unwrap().unwrap();
        assert_eq!(animal.status, AnimalStatus::Available);
    }

    #[test]
    fn test_finish_rental_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let animal_id = add_animal(&storage, "Trueno");
        let customer_id = add_customer(&storage, "Ana");

        let rental = service
            .start(animal_id, customer_id, RentalType::ShortRide)
            .unwrap();
        let rental_id = rental.id.unwrap();

        let first = service.finish(rental_id).unwrap();
        let second = service.finish(rental_id).unwrap();

        // The second call returns the same end time and changes nothing
        assert_eq!(first.end_time, second.end_time);
        assert_eq!(storage.rentals.count().unwrap(), 1);
    }

    #[test]
    fn test_finish_rental_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let err = service.finish(RentalId::from(42)).unwrap_err();
        assert!(matches!(
            err,
            CorralError::NotFound {
                entity_type: "Rental",
                ..
            }
        ));
    }

    #[test]
    fn test_animal_can_be_rented_again_after_finish() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let animal_id = add_animal(&storage, "Trueno");
        let customer_id = add_customer(&storage, "Ana");

        let first = service
            .start(animal_id, customer_id, RentalType::ShortRide)
            .unwrap();
        service.finish(first.id.unwrap()).unwrap();

        let second = service
            .start(animal_id, customer_id, RentalType::Hourly)
            .unwrap();
        assert_eq!(second.id, Some(RentalId::from(2)));

        // Exactly one active rental references the animal
        let active = storage.rentals.get_active_by_animal(animal_id).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second.id);
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RentalService::new(&storage);

        let first_animal = add_animal(&storage, "Trueno");
        let second_animal = add_animal(&storage, "Burrito");
        let customer_id = add_customer(&storage, "Ana");

        service
            .start(first_animal, customer_id, RentalType::ShortRide)
            .unwrap();
        service
            .start(second_animal, customer_id, RentalType::Hourly)
            .unwrap();

        let all = service.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, Some(RentalId::from(1)));
        assert_eq!(all[1].id, Some(RentalId::from(2)));
    }
}
