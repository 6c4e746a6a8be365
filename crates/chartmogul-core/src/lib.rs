//! Resource models for the ChartMogul API.
//!
//! This crate provides the typed request and response models exchanged with
//! ChartMogul:
//!
//! - **Customers**: [`Customer`], [`NewCustomer`], [`Customers`], [`Address`]
//! - **Plans**: [`Plan`], [`NewPlan`], [`Plans`]
//!
//! All models serialize to and from the snake_case JSON the API speaks, with
//! enum values spelled the way ChartMogul spells them (for example the
//! `Past_Due` customer status).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod customer;
pub mod plan;

pub use customer::{Address, Customer, CustomerStatus, Customers, NewCustomer};
pub use plan::{IntervalUnit, NewPlan, Plan, Plans};
