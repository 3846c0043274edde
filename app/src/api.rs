//! Server functions exposing the portfolio backend to the browser.
//!
//! Every function here runs on the site server, reaches the backend through the shared
//! [`ApiClient`](portfolio_api::ApiClient) held in [`AppState`](crate::types::AppState)
//! and reports failures as `ServerFnError::ServerError` carrying a message fit for a
//! visitor. Sections turn those messages into notices with [`user_message`].
//!
//! The backend calls themselves live in [`backend`] so they can be exercised without a
//! Leptos runtime.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};
use leptos::server_fn::codec::Json;
use portfolio_api::types::{
    BlogCategory, BlogPost, ContactReceipt, ContactSubmission, HealthStatus, Project,
    ProjectCategory, Testimonial,
};

#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;
#[cfg(feature = "ssr")]
use portfolio_api::ServiceError;

/// Fallback wording when a failure carries no message of its own, e.g. the browser
/// could not reach the site server at all.
pub mod messages {
    pub const CONTACT: &str = "Failed to send message";
    pub const BLOG_LIST: &str = "Failed to fetch blog posts";
    pub const BLOG_POST: &str = "Failed to fetch blog post";
    pub const TESTIMONIALS: &str = "Failed to fetch testimonials";
    pub const PROJECTS: &str = "Failed to fetch projects";
    pub const HEALTH: &str = "Backend service unavailable";
}

/// The message to show a visitor for a failed server function call.
#[must_use]
pub fn user_message(error: &ServerFnError, default: &str) -> String {
    match error {
        ServerFnError::ServerError(message) if !message.trim().is_empty() => message.clone(),
        _ => default.to_owned(),
    }
}

#[cfg(feature = "ssr")]
fn into_server_error(operation: &str, error: ServiceError) -> ServerFnError {
    tracing::warn!(
        operation,
        status = ?error.status(),
        cause = %error.api_error(),
        "Backend call failed: {}",
        error.message()
    );
    ServerFnError::<NoCustomError>::ServerError(error.message().to_owned())
}

/// Plain async wrappers over the domain services, one per server function.
#[cfg(feature = "ssr")]
pub mod backend {
    use portfolio_api::types::{
        BlogCategory, BlogPost, ContactReceipt, ContactSubmission, HealthStatus, Project,
        ProjectCategory, Testimonial,
    };
    use portfolio_api::{
        ApiClient, BlogQuery, BlogService, ContactService, HealthService, ProjectQuery,
        ProjectService, ServiceError, TestimonialService,
    };

    /// First page of posts for `category`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ServiceError`] from the blog service.
    pub async fn blog_posts(api: &ApiClient, category: BlogCategory) -> Result<Vec<BlogPost>, ServiceError> {
        let page = BlogService::new(api).list(BlogQuery::category(category)).await?;
        Ok(page.posts)
    }

    /// # Errors
    ///
    /// Propagates the [`ServiceError`] from the blog service.
    pub async fn blog_post(api: &ApiClient, id: &str) -> Result<BlogPost, ServiceError> {
        BlogService::new(api).get_one(id).await
    }

    /// Projects for `category`, narrowed again locally in case the backend ignores the filter.
    ///
    /// # Errors
    ///
    /// Propagates the [`ServiceError`] from the project service.
    pub async fn projects(api: &ApiClient, category: ProjectCategory) -> Result<Vec<Project>, ServiceError> {
        let mut projects = ProjectService::new(api)
            .list(ProjectQuery::category(category))
            .await?;
        projects.retain(|project| category.matches(&project.category));
        Ok(projects)
    }

    /// # Errors
    ///
    /// Propagates the [`ServiceError`] from the testimonial service.
    pub async fn testimonials(api: &ApiClient) -> Result<Vec<Testimonial>, ServiceError> {
        TestimonialService::new(api).list().await
    }

    /// # Errors
    ///
    /// Propagates the [`ServiceError`] from the contact service.
    pub async fn contact(api: &ApiClient, submission: &ContactSubmission) -> Result<ContactReceipt, ServiceError> {
        ContactService::new(api).submit(submission).await
    }

    /// # Errors
    ///
    /// Propagates the [`ServiceError`] from the health service.
    pub async fn health(api: &ApiClient) -> Result<HealthStatus, ServiceError> {
        HealthService::new(api).check().await
    }
}

#[server(endpoint = "/blog_posts", input = Json)]
pub async fn list_blog_posts(category: BlogCategory) -> Result<Vec<BlogPost>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { api, .. } = expect_context::<AppState>();
    backend::blog_posts(&api, category)
        .await
        .map_err(|e| into_server_error("list_blog_posts", e))
}

#[server(endpoint = "/blog_post")]
pub async fn get_blog_post(id: String) -> Result<BlogPost, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { api, .. } = expect_context::<AppState>();
    backend::blog_post(&api, &id)
        .await
        .map_err(|e| into_server_error("get_blog_post", e))
}

#[server(endpoint = "/projects", input = Json)]
pub async fn list_projects(category: ProjectCategory) -> Result<Vec<Project>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { api, .. } = expect_context::<AppState>();
    backend::projects(&api, category)
        .await
        .map_err(|e| into_server_error("list_projects", e))
}

#[server(endpoint = "/testimonials")]
pub async fn list_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { api, .. } = expect_context::<AppState>();
    backend::testimonials(&api)
        .await
        .map_err(|e| into_server_error("list_testimonials", e))
}

/// Forwards a contact form submission. Never retried: a duplicate message is worse
/// than asking the visitor to press the button again.
#[server(endpoint = "/contact", input = Json)]
pub async fn submit_contact(data: ContactSubmission) -> Result<ContactReceipt, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { api, .. } = expect_context::<AppState>();
    let receipt = backend::contact(&api, &data)
        .await
        .map_err(|e| into_server_error("submit_contact", e))?;
    tracing::info!(id = ?receipt.id, "Contact message forwarded");
    Ok(receipt)
}

#[server(endpoint = "/backend_health")]
pub async fn backend_health() -> Result<HealthStatus, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { api, .. } = expect_context::<AppState>();
    backend::health(&api)
        .await
        .map_err(|e| into_server_error("backend_health", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let error: ServerFnError = ServerFnError::ServerError("Blog post not found".to_owned());
        assert_eq!(user_message(&error, messages::BLOG_POST), "Blog post not found");
    }

    #[test]
    fn test_user_message_defaults_for_transport_failures() {
        let error: ServerFnError = ServerFnError::Request("connection reset".to_owned());
        assert_eq!(user_message(&error, messages::PROJECTS), "Failed to fetch projects");

        let blank: ServerFnError = ServerFnError::ServerError("  ".to_owned());
        assert_eq!(user_message(&blank, messages::CONTACT), "Failed to send message");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_into_server_error_carries_message() {
        use portfolio_api::types::ProjectCategory;
        use portfolio_api::{ApiClient, ApiConfig};

        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        let error = tokio_test::block_on(backend::projects(&client, ProjectCategory::All)).unwrap_err();

        let server_error = into_server_error("list_projects", error);
        assert_eq!(
            user_message(&server_error, messages::PROJECTS),
            "Failed to fetch projects"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_function_signatures() {
        let _posts_fn: fn(BlogCategory) -> _ = list_blog_posts;
        let _post_fn: fn(String) -> _ = get_blog_post;
        let _projects_fn: fn(ProjectCategory) -> _ = list_projects;
        let _testimonials_fn: fn() -> _ = list_testimonials;
        let _contact_fn: fn(ContactSubmission) -> _ = submit_contact;
        let _health_fn: fn() -> _ = backend_health;
    }
}
