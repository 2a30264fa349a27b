//! Service layer for corral
//!
//! The service layer provides business logic on top of the storage layer.
//! The rental service owns the cross-entity invariant ("at most one active
//! rental per animal"); the animal and customer services are thin
//! registration wrappers.

pub mod animal;
pub mod customer;
pub mod rental;

pub use animal::AnimalService;
pub use customer::CustomerService;
pub use rental::RentalService;
