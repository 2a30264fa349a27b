//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod animal;
pub mod customer;
pub mod rental;

pub use animal::{handle_animal_command, AnimalCommands};
pub use customer::{handle_customer_command, CustomerCommands};
pub use rental::{handle_rental_command, RentalCommands};
