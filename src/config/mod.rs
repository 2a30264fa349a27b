//! Configuration module for corral
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CorralPaths;
pub use settings::Settings;
