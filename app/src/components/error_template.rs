//! Error page for routes the single-page layout does not know.
//!
//! Sets the HTTP status on the server so crawlers see a real 404.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the errors collected in `errors`.
pub fn component(errors: Errors) -> impl IntoView {
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center px-4 min-h-screen text-center").child((
        h1().class("mb-4 text-5xl font-bold text-white").child("Oops"),
        errors
            .into_iter()
            .map(|error| {
                p().class("text-lg tracking-widest text-gray-400 uppercase")
                    .child(format!("{} | {error}", error.status_code().as_u16()))
            })
            .collect_view(),
        a().href("/")
            .class("mt-8 text-blue-400 hover:underline")
            .child("Back to the portfolio"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Page not found");
    }
}
