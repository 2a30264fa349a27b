//! Rental model
//!
//! A rental links one animal to one customer for a span of time. It is
//! active while `end_time` is `None`; finishing it is a one-way transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AnimalId, CustomerId, RentalId};

/// Kind of rental on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalType {
    /// A single short ride around the grounds
    ShortRide,
    /// Billed by the hour
    Hourly,
}

impl RentalType {
    /// Parse a rental type from string. Unknown values are rejected rather
    /// than substituted with a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "short-ride" | "short_ride" | "shortride" => Some(Self::ShortRide),
            "hourly" => Some(Self::Hourly),
            _ => None,
        }
    }
}

impl fmt::Display for RentalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortRide => write!(f, "Short ride"),
            Self::Hourly => write!(f, "Hourly"),
        }
    }
}

/// A rental transaction
///
/// References the animal and customer by id; both must exist when the rental
/// is created. `start_time` is set at construction and never changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    /// Unique identifier, assigned by the repository on first save
    pub id: Option<RentalId>,

    /// The rented animal
    pub animal_id: AnimalId,

    /// The customer holding the rental
    pub customer_id: CustomerId,

    /// When the rental started
    pub start_time: DateTime<Utc>,

    /// When the rental ended; `None` while active
    pub end_time: Option<DateTime<Utc>>,

    /// Kind of rental
    pub rental_type: RentalType,
}

impl Rental {
    /// Create a new, not-yet-saved rental starting now
    pub fn new(animal_id: AnimalId, customer_id: CustomerId, rental_type: RentalType) -> Self {
        Self {
            id: None,
            animal_id,
            customer_id,
            start_time: Utc::now(),
            end_time: None,
            rental_type,
        }
    }

    /// Whether the rental is still open
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rental_is_active() {
        let rental = Rental::new(
            AnimalId::from(1),
            CustomerId::from(2),
            RentalType::ShortRide,
        );
        assert!(rental.id.is_none());
        assert!(rental.is_active());
        assert!(rental.end_time.is_none());
    }

    #[test]
    fn test_finished_rental_is_not_active() {
        let mut rental = Rental::new(AnimalId::from(1), CustomerId::from(1), RentalType::Hourly);
        rental.end_time = Some(Utc::now());
        assert!(!rental.is_active());
    }

    #[test]
    fn test_type_parsing() {
        assert_eq!(RentalType::parse("short-ride"), Some(RentalType::ShortRide));
        assert_eq!(RentalType::parse("SHORT_RIDE"), Some(RentalType::ShortRide));
        assert_eq!(RentalType::parse("hourly"), Some(RentalType::Hourly));
        assert_eq!(RentalType::parse("daily"), None);
    }

    #[test]
    fn test_serialization() {
        let rental = Rental::new(AnimalId::from(3), CustomerId::from(4), RentalType::Hourly);
        let json = serde_json::to_string(&rental).unwrap();
        assert!(json.contains("\"rental_type\":\"hourly\""));
        assert!(json.contains("\"end_time\":null"));

        let deserialized: Rental = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.animal_id, AnimalId::from(3));
        assert!(deserialized.is_active());
    }
}
