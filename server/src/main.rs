#![recursion_limit = "256"]

mod redirect;
mod utils;

use std::sync::Arc;

use app::{component, shell, types::AppState};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use portfolio_api::{ApiClient, ApiConfig};
use redirect::redirect_www;
use serde_json::json;
use shared_utils::Backoff;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utils::{probe_backend, site_url, sitemap_handler};

// Health check handler for the site server itself, independent of the backend
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio-site",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

const fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();
    let routes = generate_route_list(component);

    let api = match ApiClient::new(&ApiConfig::from_env()) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            logging::error!("Failed to build backend client: {}", err);
            return;
        }
    };

    // Serving must not wait on the backend.
    tokio::spawn({
        let api = Arc::clone(&api);
        async move {
            probe_backend(&api, Backoff::default()).await;
        }
    });

    let app_state = AppState {
        api,
        leptos_options: Arc::new(leptos_options.clone()),
    };
    let site_url = site_url(&format!("http://{addr}"));

    let app =
        Router::new()
            .leptos_routes_with_context(
                &app_state,
                routes,
                {
                    let app_state = app_state.clone();
                    move || provide_context(app_state.clone())
                },
                {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                },
            )
            .route("/health", get(health_handler))
            .route("/sitemap.xml", get(move || sitemap_handler(site_url.clone())))
            .nest_service("/static", ServeDir::new(site_root))
            .layer(
                tower::ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(axum::middleware::from_fn(redirect_www)),
            )
            .layer(CompressionLayer::new().compress_when(
                NotForContentType::new("image/svg+xml").and(SizeAbove::new(1024)),
            ))
            .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
            .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    let serve_result = axum::serve(listener, app.into_make_service()).await;
    match serve_result {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
            logging::error!("Error details: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_follows_build() {
        if cfg!(debug_assertions) {
            assert_eq!(tracing_level(), tracing::Level::DEBUG);
        } else {
            assert_eq!(tracing_level(), tracing::Level::INFO);
        }
    }

    #[tokio::test]
    async fn test_configuration_loading() {
        let config_result = get_configuration(Some("Cargo.toml"));
        assert!(config_result.is_ok() || config_result.is_err());
    }

    #[test]
    fn test_health_handler_structure() {
        let _: fn() -> _ = health_handler;

        tokio_test::block_on(async {
            let result = health_handler().await;
            assert!(result.is_ok());

            let json_value = result.unwrap().0;
            assert_eq!(json_value["status"], "healthy");
            assert_eq!(json_value["service"], "portfolio-site");
            assert!(json_value.get("timestamp").is_some());
            assert!(json_value.get("version").is_some());
        });
    }

    #[test]
    fn test_state_without_backend_is_servable() {
        let api = ApiClient::new(&ApiConfig::from_values(None, None)).unwrap();
        let state = AppState {
            api: Arc::new(api),
            leptos_options: Arc::new(LeptosOptions::builder().output_name("portfolio").build()),
        };
        assert!(!state.api.is_configured());
    }
}
