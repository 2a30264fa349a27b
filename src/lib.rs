//! corral - Terminal-based rental management for small animal farms
//!
//! This library provides the core functionality for the corral rental
//! tracker: registering animals and customers, and running the rental
//! lifecycle that guarantees an animal is rented by at most one customer
//! at a time.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (animals, customers, rentals)
//! - `storage`: JSON file storage layer, one repository per entity kind
//! - `services`: Business logic layer; the rental service owns the
//!   cross-entity invariant
//! - `cli`: clap subcommand handlers
//! - `display`: Terminal table formatting

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::CorralError;
