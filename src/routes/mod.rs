//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the small JSON API and health probe, stitches in Leptos
//! SSR rendering of the portfolio page, and serves the compiled WASM/CSS
//! bundle plus public assets from disk.

pub mod projects;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::site::Project;

use crate::config::ServerConfig;

/// Read-only JSON routes.
fn api_routes() -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]);

    Router::new()
        .route("/api/projects", get(projects::list_projects))
        .route("/healthz", get(healthz))
        .layer(cors)
}

/// Full site: API routes + Leptos SSR page + `/pkg` bundle + static assets.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_dir = config.assets_dir.clone().unwrap_or_else(|| site_root.clone());
    tracing::debug!(site_root = %site_root.display(), assets_dir = %assets_dir.display(), "static directories");
    for path in missing_local_images(client::site::projects(), &assets_dir) {
        tracing::warn!(image = path, assets_dir = %assets_dir.display(), "project image not found; it will 404");
    }

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Site-relative image URLs in `projects` with no matching file under
/// `assets_dir`. Absolute `http(s)` URLs are not checked.
pub fn missing_local_images<'a>(projects: &'a [Project], assets_dir: &Path) -> Vec<&'a str> {
    projects
        .iter()
        .map(|p| p.image_url.as_str())
        .filter(|url| url.starts_with('/') && !url.starts_with("//"))
        .filter(|url| !assets_dir.join(url.trim_start_matches('/')).is_file())
        .collect()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
