//! Records and REST client for the portfolio backend.
//!
//! The record types in [`types`] are always available so the browser bundle can share
//! them. The HTTP client and the domain services sit behind the `http` feature and only
//! run on the server.

pub mod types;

#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod error;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub mod services;

#[cfg(feature = "http")]
pub use config::ApiConfig;
#[cfg(feature = "http")]
pub use error::{ApiError, ServiceError};
#[cfg(feature = "http")]
pub use http::ApiClient;
#[cfg(feature = "http")]
pub use services::{
    BlogQuery, BlogService, ContactService, HealthService, ProjectQuery, ProjectService,
    TestimonialService,
};
