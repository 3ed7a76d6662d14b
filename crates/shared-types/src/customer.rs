use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::AppError;

/// Lifecycle status of a customer account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Lead,
    Inactive,
}

/// All statuses in display order.
pub const ALL_CUSTOMER_STATUSES: &[CustomerStatus] = &[
    CustomerStatus::Active,
    CustomerStatus::Lead,
    CustomerStatus::Inactive,
];

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Lead => "lead",
            CustomerStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Lead => "Lead",
            CustomerStatus::Inactive => "Inactive",
        }
    }

    /// Parse a status key, falling back to Active.
    pub fn from_key(s: &str) -> Self {
        match s {
            "lead" => CustomerStatus::Lead,
            "inactive" => CustomerStatus::Inactive,
            _ => CustomerStatus::Active,
        }
    }
}

/// A customer record managed from the customers page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,
    pub created_at: DateTime<Utc>,
}

/// Editable customer fields, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,
}

impl CustomerForm {
    pub fn from_customer(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            company: c.company.clone(),
            phone: c.phone.clone(),
            status: c.status,
        }
    }

    /// Trim text fields and turn blank optionals into `None`.
    pub fn normalized(&self) -> Self {
        fn blank_to_none(v: &Option<String>) -> Option<String> {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: blank_to_none(&self.company),
            phone: blank_to_none(&self.phone),
            status: self.status,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if self.name.trim().is_empty() {
            field_errors.insert("name".to_string(), "is required".to_string());
        }
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && !domain.is_empty())
            .unwrap_or(false);
        if !well_formed {
            field_errors.insert("email".to_string(), "must be a valid address".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Please fix the highlighted fields", field_errors))
        }
    }

    /// Build a new record from this form, normalizing the fields.
    pub fn into_customer(self, id: Uuid, created_at: DateTime<Utc>) -> Customer {
        let f = self.normalized();
        Customer {
            id,
            name: f.name,
            email: f.email,
            company: f.company,
            phone: f.phone,
            status: f.status,
            created_at,
        }
    }
}
