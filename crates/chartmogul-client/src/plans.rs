//! Plan endpoints, thin callers over the request pipeline.

use chartmogul_core::{NewPlan, Plan, Plans};

use crate::error::Result;
use crate::http::{ChartMogulClient, RequestOptions};

impl ChartMogulClient {
    /// List plans, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn list_plans(&self, options: &RequestOptions) -> Result<Plans> {
        self.get("/v1/plans", options).await
    }

    /// Create a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status; a rejected payload surfaces as [`crate::Error::SchemaInvalid`].
    pub async fn create_plan(&self, input: &NewPlan, options: &RequestOptions) -> Result<Plan> {
        self.post("/v1/plans", input, options).await
    }

    /// Delete a plan. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn delete_plan(&self, uuid: &str, options: &RequestOptions) -> Result<()> {
        self.delete(&format!("/v1/plans/{uuid}"), options).await
    }
}
