use crate::error::ServiceError;
use crate::http::ApiClient;
use crate::types::HealthStatus;

const UNAVAILABLE: &str = "Backend service unavailable";

pub struct HealthService<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthService<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Hits the backend root endpoint.
    ///
    /// # Errors
    ///
    /// Any failure is reported as "Backend service unavailable", whatever the backend said.
    pub async fn check(&self) -> Result<HealthStatus, ServiceError> {
        self.client
            .get(&[], &[])
            .await
            .map_err(|err| ServiceError::fixed(err, UNAVAILABLE))
    }
}
