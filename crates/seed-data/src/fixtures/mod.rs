//! Fixture records written by the seeder.
//!
//! The built-in dataset lives in [`placeholder`]; other datasets with the same
//! shape can be loaded from JSON with [`Fixtures::from_json_file`].

mod placeholder;

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;
use uuid::Uuid;

/// Longest month code the `revenue` table accepts.
pub const MAX_MONTH_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid fixtures: {0}")]
    Invalid(String),
}

/// A dashboard user. `password` is plaintext; it is hashed before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFixture {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFixture {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Invoice payment status, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

/// An invoice. It carries no id: the database generates one per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFixture {
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueFixture {
    pub month: String,
    pub revenue: i32,
}

/// The complete dataset for one seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: Vec<UserFixture>,
    #[serde(default)]
    pub customers: Vec<CustomerFixture>,
    #[serde(default)]
    pub invoices: Vec<InvoiceFixture>,
    #[serde(default)]
    pub revenue: Vec<RevenueFixture>,
}

impl Fixtures {
    /// The built-in sample dataset.
    pub fn placeholder() -> Self {
        Self {
            users: placeholder::users(),
            customers: placeholder::customers(),
            invoices: placeholder::invoices(),
            revenue: placeholder::revenue(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Rejects data the schema cannot hold or that would collide with itself
    /// on a unique column.
    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut emails = HashSet::new();
        for user in &self.users {
            if !emails.insert(user.email.as_str()) {
                return Err(FixtureError::Invalid(format!(
                    "duplicate user email {}",
                    user.email
                )));
            }
        }

        if let Some(invoice) = self.invoices.iter().find(|i| i.amount < 0) {
            return Err(FixtureError::Invalid(format!(
                "negative invoice amount {} for customer {}",
                invoice.amount, invoice.customer_id
            )));
        }

        let mut months = HashSet::new();
        for row in &self.revenue {
            if row.month.is_empty() || row.month.chars().count() > MAX_MONTH_LEN {
                return Err(FixtureError::Invalid(format!(
                    "revenue month {:?} must be 1 to {MAX_MONTH_LEN} characters",
                    row.month
                )));
            }
            if !months.insert(row.month.as_str()) {
                return Err(FixtureError::Invalid(format!(
                    "duplicate revenue month {}",
                    row.month
                )));
            }
        }

        Ok(())
    }

    /// Invoices whose customer is not part of this dataset.
    pub fn orphan_invoices(&self) -> Vec<&InvoiceFixture> {
        let customer_ids: HashSet<Uuid> = self.customers.iter().map(|c| c.id).collect();
        self.invoices
            .iter()
            .filter(|i| !customer_ids.contains(&i.customer_id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.customers.is_empty()
            && self.invoices.is_empty()
            && self.revenue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_placeholder_dataset_is_consistent() {
        let fixtures = Fixtures::placeholder();
        assert_eq!(fixtures.users.len(), 1);
        assert_eq!(fixtures.customers.len(), 6);
        assert_eq!(fixtures.invoices.len(), 13);
        assert_eq!(fixtures.revenue.len(), 12);
        assert!(fixtures.validate().is_ok());
        assert!(fixtures.orphan_invoices().is_empty());
    }

    #[test]
    fn test_validate_rejects_long_month() {
        let fixtures = Fixtures {
            revenue: vec![RevenueFixture {
                month: "March".to_string(),
                revenue: 10,
            }],
            ..Default::default()
        };
        assert!(matches!(fixtures.validate(), Err(FixtureError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_email() {
        let user = UserFixture {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "secret".to_string(),
        };
        let twin = UserFixture {
            id: Uuid::new_v4(),
            ..user.clone()
        };
        let fixtures = Fixtures {
            users: vec![user, twin],
            ..Default::default()
        };
        assert!(matches!(fixtures.validate(), Err(FixtureError::Invalid(_))));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "revenue": [{ "month": "Jan", "revenue": 1000 }],
            "invoices": [{
                "customer_id": "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
                "amount": 15795,
                "status": "pending",
                "date": "2022-12-06"
            }]
        }"#;

        let fixtures = Fixtures::from_json_str(json).unwrap();
        assert!(fixtures.users.is_empty());
        assert_eq!(fixtures.revenue[0].month, "Jan");
        assert_eq!(fixtures.invoices[0].status, InvoiceStatus::Pending);
        assert_eq!(fixtures.invoices[0].date, date!(2022 - 12 - 06));
        assert_eq!(fixtures.orphan_invoices().len(), 1);
    }

    #[test]
    fn test_from_json_str_rejects_unknown_status() {
        let json = r#"{ "invoices": [{
            "customer_id": "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
            "amount": 1, "status": "overdue", "date": "2022-12-06"
        }] }"#;
        assert!(matches!(
            Fixtures::from_json_str(json),
            Err(FixtureError::Json(_))
        ));
    }
}
