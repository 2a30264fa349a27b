//! Animal model
//!
//! Represents a rentable animal on the farm (horses, donkeys, pigs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AnimalId;

/// Kind of animal offered for rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    /// Riding horse
    Horse,
    /// Donkey
    Donkey,
    /// Pig (children's rides)
    Pig,
}

impl AnimalType {
    /// Parse an animal type from string. Unknown values are rejected rather
    /// than substituted with a default; the caller decides how to recover.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horse" => Some(Self::Horse),
            "donkey" => Some(Self::Donkey),
            "pig" => Some(Self::Pig),
            _ => None,
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horse => write!(f, "Horse"),
            Self::Donkey => write!(f, "Donkey"),
            Self::Pig => write!(f, "Pig"),
        }
    }
}

/// Rental availability of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    /// Free to be rented
    Available,
    /// Currently out on an active rental
    Rented,
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Rented => write!(f, "Rented"),
        }
    }
}

/// A rentable animal
///
/// Animals are created `Available`; only the rental service transitions the
/// status afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    /// Unique identifier, assigned by the repository on first save
    pub id: Option<AnimalId>,

    /// Animal name (e.g., "Trueno")
    pub name: String,

    /// Kind of animal
    #[serde(rename = "type")]
    pub animal_type: AnimalType,

    /// Current availability
    pub status: AnimalStatus,

    /// When the animal was registered
    pub created_at: DateTime<Utc>,
}

impl Animal {
    /// Create a new, not-yet-saved animal in `Available` status
    pub fn new(name: impl Into<String>, animal_type: AnimalType) -> Self {
        Self {
            id: None,
            name: name.into(),
            animal_type,
            status: AnimalStatus::Available,
            created_at: Utc::now(),
        }
    }

    /// Whether the animal can currently be rented
    pub fn is_available(&self) -> bool {
        self.status == AnimalStatus::Available
    }

    /// Validate the animal
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Animal name cannot be empty".into());
        }
        if self.name.len() > 100 {
            return Err(format!(
                "Animal name too long ({} chars, max 100)",
                self.name.len()
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.animal_type)
    }
}
