//! Customer models.
//!
//! Customers are the central resource of the ChartMogul API: most metrics
//! and activity endpoints hang off a customer UUID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a customer, as ChartMogul reports it.
///
/// The wire spelling is ChartMogul's own (`New_Lead`, `Past_Due`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    /// A lead that has not been worked yet.
    #[serde(rename = "New_Lead")]
    NewLead,
    /// A lead currently being worked.
    #[serde(rename = "Working_Lead")]
    WorkingLead,
    /// A qualified lead.
    #[serde(rename = "Qualified_Lead")]
    QualifiedLead,
    /// A lead that did not qualify.
    #[serde(rename = "Unqualified_Lead")]
    UnqualifiedLead,
    /// A paying customer with an active subscription.
    #[serde(rename = "Active")]
    Active,
    /// A customer whose latest payment failed.
    #[serde(rename = "Past_Due")]
    PastDue,
    /// A customer whose subscriptions have all been cancelled.
    #[serde(rename = "Cancelled")]
    Cancelled,
}

/// Postal address attached to a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// ZIP or postal code.
    pub address_zip: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
}

/// A customer as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// ChartMogul UUID for the customer.
    pub uuid: String,
    /// The customer's ID in the source billing system.
    pub external_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Company name, if distinct from the customer name.
    pub company: Option<String>,
    /// Current lifecycle status.
    pub status: Option<CustomerStatus>,
    /// When the customer first subscribed.
    pub customer_since: Option<DateTime<Utc>>,
    /// Monthly recurring revenue attributed to this customer, in cents.
    pub mrr: Option<i64>,
    /// Annualized run rate attributed to this customer, in cents.
    pub arr: Option<i64>,
    /// Postal address.
    pub address: Option<Address>,
}

/// Payload for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    /// UUID of the data source the customer belongs to.
    pub data_source_uuid: String,
    /// The customer's ID in the source billing system.
    pub external_id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Paged list envelope for customers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customers {
    /// Customers on this page.
    pub entries: Vec<Customer>,
    /// Whether further pages exist.
    pub has_more: bool,
    /// Page size the server applied.
    pub per_page: u32,
    /// Current page number, 1-based.
    pub page: u32,
}
