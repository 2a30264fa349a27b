//! Core data models for corral
//!
//! This module contains the data structures that represent the rental
//! domain: animals, customers, and the rentals linking them.

pub mod animal;
pub mod customer;
pub mod ids;
pub mod rental;

pub use animal::{Animal, AnimalStatus, AnimalType};
pub use customer::Customer;
pub use ids::{AnimalId, CustomerId, RentalId};
pub use rental::{Rental, RentalType};
