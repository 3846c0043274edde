use serde::Deserialize;

use crate::error::ServiceError;
use crate::http::ApiClient;
use crate::types::{NewTestimonial, Testimonial};

const LIST_FAILED: &str = "Failed to fetch testimonials";
const SUBMIT_FAILED: &str = "Failed to submit testimonial";

#[derive(Deserialize)]
struct TestimonialsEnvelope {
    testimonials: Vec<Testimonial>,
}

pub struct TestimonialService<'a> {
    client: &'a ApiClient,
}

impl<'a> TestimonialService<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All approved testimonials, newest first as the backend orders them.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] worded for the visitor.
    pub async fn list(&self) -> Result<Vec<Testimonial>, ServiceError> {
        let envelope: TestimonialsEnvelope = self
            .client
            .get(&["testimonials"], &[])
            .await
            .map_err(|err| ServiceError::from_api(err, LIST_FAILED))?;
        Ok(envelope.testimonials)
    }

    /// Submits a testimonial for moderation.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] worded for the visitor.
    pub async fn submit(&self, testimonial: &NewTestimonial) -> Result<Testimonial, ServiceError> {
        self.client
            .post(&["testimonials"], testimonial)
            .await
            .map_err(|err| ServiceError::from_api(err, SUBMIT_FAILED))
    }
}
