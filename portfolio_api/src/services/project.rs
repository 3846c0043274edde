use serde::Deserialize;

use crate::error::ServiceError;
use crate::http::ApiClient;
use crate::types::{NewProject, Project, ProjectCategory};

const LIST_FAILED: &str = "Failed to fetch projects";
const CREATE_FAILED: &str = "Failed to create project";

/// Filters for a project listing. Both are optional on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    pub category: ProjectCategory,
    pub featured: Option<bool>,
}

impl ProjectQuery {
    #[must_use]
    pub const fn category(category: ProjectCategory) -> Self {
        Self {
            category,
            featured: None,
        }
    }

    pub(crate) fn to_pairs(self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.query_value() {
            pairs.push(("category", category.to_owned()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        pairs
    }
}

#[derive(Deserialize)]
struct ProjectsEnvelope {
    projects: Vec<Project>,
}

pub struct ProjectService<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectService<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Projects matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] worded for the visitor.
    pub async fn list(&self, query: ProjectQuery) -> Result<Vec<Project>, ServiceError> {
        let envelope: ProjectsEnvelope = self
            .client
            .get(&["projects"], &query.to_pairs())
            .await
            .map_err(|err| ServiceError::from_api(err, LIST_FAILED))?;
        Ok(envelope.projects)
    }

    /// Creates a project entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] worded for the visitor.
    pub async fn create(&self, project: &NewProject) -> Result<Project, ServiceError> {
        self.client
            .post(&["projects"], project)
            .await
            .map_err(|err| ServiceError::from_api(err, CREATE_FAILED))
    }
}
