use crate::error::{ApiError, ServiceError};
use crate::http::ApiClient;
use crate::types::{
    BlogCategory, BlogPage, BlogPost, DEFAULT_BLOG_PAGE_SIZE, MAX_BLOG_PAGE_SIZE, NewBlogPost,
};

const LIST_FAILED: &str = "Failed to fetch blog posts";
const GET_FAILED: &str = "Failed to fetch blog post";
const CREATE_FAILED: &str = "Failed to create blog post";

/// Paging and filtering for a blog listing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogQuery {
    pub category: BlogCategory,
    pub page: u32,
    pub per_page: u32,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            category: BlogCategory::All,
            page: 1,
            per_page: DEFAULT_BLOG_PAGE_SIZE,
        }
    }
}

impl BlogQuery {
    #[must_use]
    pub fn category(category: BlogCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    fn validate(self) -> Result<(), ApiError> {
        if self.page < 1 {
            return Err(ApiError::InvalidRequest(
                "Page must be at least 1".to_owned(),
            ));
        }
        if !(1..=MAX_BLOG_PAGE_SIZE).contains(&self.per_page) {
            return Err(ApiError::InvalidRequest(format!(
                "Page size must be between 1 and {MAX_BLOG_PAGE_SIZE}"
            )));
        }
        Ok(())
    }

    pub(crate) fn to_pairs(self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(category) = self.category.query_value() {
            pairs.push(("category", category.to_owned()));
        }
        pairs
    }
}

pub struct BlogService<'a> {
    client: &'a ApiClient,
}

impl<'a> BlogService<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of published posts.
    ///
    /// # Errors
    ///
    /// Out-of-range paging is rejected before any request is made.
    pub async fn list(&self, query: BlogQuery) -> Result<BlogPage, ServiceError> {
        query
            .validate()
            .map_err(|err| ServiceError::from_api(err, LIST_FAILED))?;

        self.client
            .get(&["blog"], &query.to_pairs())
            .await
            .map_err(|err| ServiceError::from_api(err, LIST_FAILED))
    }

    /// A single post by id.
    ///
    /// # Errors
    ///
    /// A missing post surfaces as a 404 [`ServiceError`] (see [`ServiceError::is_not_found`]).
    pub async fn get_one(&self, id: &str) -> Result<BlogPost, ServiceError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ServiceError::from_api(
                ApiError::InvalidRequest("A blog post id is required".to_owned()),
                GET_FAILED,
            ));
        }

        self.client
            .get(&["blog", id], &[])
            .await
            .map_err(|err| ServiceError::from_api(err, GET_FAILED))
    }

    /// Publishes or drafts a new post.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] worded for the visitor.
    pub async fn create(&self, post: &NewBlogPost) -> Result<BlogPost, ServiceError> {
        self.client
            .post(&["blog"], post)
            .await
            .map_err(|err| ServiceError::from_api(err, CREATE_FAILED))
    }
}
