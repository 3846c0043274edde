use tracing::info;

use crate::error::{ApiError, ServiceError};
use crate::http::ApiClient;
use crate::types::{ContactReceipt, ContactSubmission};

const SUBMIT_FAILED: &str = "Failed to send message";

pub struct ContactService<'a> {
    client: &'a ApiClient,
}

impl<'a> ContactService<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Sends a contact form submission.
    ///
    /// # Errors
    ///
    /// Blank fields are rejected before any request is made; backend failures carry
    /// the backend's message when it sent one.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<ContactReceipt, ServiceError> {
        let missing = submission.missing_fields();
        if !missing.is_empty() {
            let reason = format!("Please fill in: {}", missing.join(", "));
            return Err(ServiceError::from_api(ApiError::InvalidRequest(reason), SUBMIT_FAILED));
        }

        let receipt: ContactReceipt = self
            .client
            .post(&["contact"], submission)
            .await
            .map_err(|err| ServiceError::from_api(err, SUBMIT_FAILED))?;

        info!(id = ?receipt.id, "Contact submission accepted");
        Ok(receipt)
    }
}
