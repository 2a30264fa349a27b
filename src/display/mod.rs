//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod animal;
pub mod customer;
pub mod rental;

pub use animal::format_animal_list;
pub use customer::format_customer_list;
pub use rental::format_rental_list;
