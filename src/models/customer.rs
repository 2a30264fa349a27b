//! Customer model
//!
//! Represents a customer who can rent animals. Customers are immutable after
//! registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CustomerId;

/// A registered customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, assigned by the repository on first save
    pub id: Option<CustomerId>,

    /// Full name of the customer
    pub full_name: String,

    /// When the customer was registered
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new, not-yet-saved customer
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate the customer
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Customer name cannot be empty".into());
        }
        if self.full_name.len() > 100 {
            return Err(format!(
                "Customer name too long ({} chars, max 100)",
                self.full_name.len()
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer() {
        let customer = Customer::new("Ana García");
        assert!(customer.id.is_none());
        assert_eq!(customer.full_name, "Ana García");
    }

    #[test]
    fn test_validation() {
        assert!(Customer::new("Ana").validate().is_ok());
        assert!(Customer::new("  ").validate().is_err());
        assert!(Customer::new("a".repeat(101)).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let customer = Customer::new("Ana García");
        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.full_name, "Ana García");
    }
}
