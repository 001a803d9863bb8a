//! Project catalog API.

use axum::response::Json;
use client::site::{self, Project};

/// `GET /api/projects` — the bundled project list in display order.
pub async fn list_projects() -> Json<&'static [Project]> {
    Json(site::projects())
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
