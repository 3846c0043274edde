//! Domain services, one per backend resource.
//!
//! Each service borrows the shared [`ApiClient`](crate::http::ApiClient), validates its
//! input, makes exactly one call and words any failure for the visitor.

mod blog;
mod contact;
mod health;
mod project;
mod testimonial;

pub use blog::{BlogQuery, BlogService};
pub use contact::ContactService;
pub use health::HealthService;
pub use project::{ProjectQuery, ProjectService};
pub use testimonial::TestimonialService;
