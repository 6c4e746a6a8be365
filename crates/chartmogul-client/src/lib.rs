//! ChartMogul API client.
//!
//! This crate provides a typed client for the ChartMogul billing and
//! analytics REST API. Every operation flows through a single pipeline:
//! build the request, dispatch it with a fixed 10-second timeout, then
//! either decode the JSON response or classify the HTTP status into a typed
//! error.
//!
//! # Example
//!
//! ```no_run
//! use chartmogul_client::{ApiConfig, ChartMogulClient, RequestOptions};
//!
//! # async fn example() -> Result<(), chartmogul_client::Error> {
//! let client = ChartMogulClient::new(ApiConfig::new(
//!     "your-account-token",
//!     "your-secret-key",
//! ));
//!
//! let customers = client.list_customers(&RequestOptions::new()).await?;
//! for customer in customers.entries {
//!     println!("{}: {:?}", customer.external_id, customer.status);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod customers;
mod error;
mod http;
mod plans;
mod webhook;

pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use http::{ChartMogulClient, RequestOptions};
pub use webhook::handle_webhook;
