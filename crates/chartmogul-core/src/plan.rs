//! Subscription plan models.

use serde::{Deserialize, Serialize};

/// Billing interval unit for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    /// Billed every N days.
    Day,
    /// Billed every N months.
    Month,
    /// Billed every N years.
    Year,
}

/// A subscription plan as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// ChartMogul UUID for the plan.
    pub uuid: String,
    /// UUID of the data source the plan belongs to.
    pub data_source_uuid: String,
    /// Display name.
    pub name: String,
    /// Number of interval units between billings.
    pub interval_count: u32,
    /// Unit of the billing interval.
    pub interval_unit: IntervalUnit,
    /// The plan's ID in the source billing system, if any.
    pub external_id: Option<String>,
}

/// Payload for creating a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlan {
    /// UUID of the data source the plan belongs to.
    pub data_source_uuid: String,
    /// Display name.
    pub name: String,
    /// Number of interval units between billings.
    pub interval_count: u32,
    /// Unit of the billing interval.
    pub interval_unit: IntervalUnit,
    /// The plan's ID in the source billing system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Paged list envelope for plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plans {
    /// Plans on this page.
    pub plans: Vec<Plan>,
    /// Current page number, 1-based.
    pub current_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
}
