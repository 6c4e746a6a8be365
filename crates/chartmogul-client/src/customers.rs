//! Customer endpoints, thin callers over the request pipeline.

use chartmogul_core::{Customer, Customers, NewCustomer};

use crate::error::Result;
use crate::http::{ChartMogulClient, RequestOptions};

impl ChartMogulClient {
    /// List customers, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn list_customers(&self, options: &RequestOptions) -> Result<Customers> {
        self.get("/v1/customers", options).await
    }

    /// Fetch a single customer by its ChartMogul UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status; an unknown UUID surfaces as [`crate::Error::NotFound`].
    pub async fn retrieve_customer(
        &self,
        uuid: &str,
        options: &RequestOptions,
    ) -> Result<Customer> {
        self.get(&format!("/v1/customers/{uuid}"), options).await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status; a rejected payload surfaces as [`crate::Error::SchemaInvalid`].
    pub async fn create_customer(
        &self,
        input: &NewCustomer,
        options: &RequestOptions,
    ) -> Result<Customer> {
        self.post("/v1/customers", input, options).await
    }

    /// Replace a customer's attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn update_customer(
        &self,
        uuid: &str,
        input: &NewCustomer,
        options: &RequestOptions,
    ) -> Result<Customer> {
        self.put(&format!("/v1/customers/{uuid}"), input, options)
            .await
    }

    /// Delete a customer. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns a non-2xx
    /// status.
    pub async fn delete_customer(&self, uuid: &str, options: &RequestOptions) -> Result<()> {
        self.delete(&format!("/v1/customers/{uuid}"), options).await
    }
}
