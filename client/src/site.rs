//! Static site content: owner contact details and the project catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The project list ships as `data/projects.json`, embedded at compile time.
//! The server validates it at startup and serves it at `/api/projects`; the
//! page renders it in file order.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Address every contact draft is sent to.
pub const CONTACT_EMAIL: &str = "ravikumarjalapatii@gmail.com";

/// Raw bundled catalog.
pub const PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// Icon shown next to a contact detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactIcon {
    Phone,
    Location,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: ContactIcon,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: ContactIcon::Phone, label: "Phone", value: "+91-6300594097" },
    ContactDetail { icon: ContactIcon::Location, label: "Location", value: "Bangalore, Karnataka, India" },
    ContactDetail { icon: ContactIcon::Email, label: "Email", value: CONTACT_EMAIL },
];

/// A showcased project. Identity is its position in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub github_link: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("project catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
    #[error("project {index} links to a non-https source page: {link}")]
    InsecureLink { index: usize, link: String },
}

/// Parse and check a catalog document.
///
/// # Errors
///
/// Returns [`CatalogError`] when the JSON is malformed, a required text field
/// is empty, or a source link is not `https://`.
pub fn parse_catalog(raw: &str) -> Result<Vec<Project>, CatalogError> {
    let projects: Vec<Project> = serde_json::from_str(raw)?;
    for (index, project) in projects.iter().enumerate() {
        let required = [
            ("title", &project.title),
            ("description", &project.description),
            ("imageUrl", &project.image_url),
            ("githubLink", &project.github_link),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CatalogError::EmptyField { index, field });
        }
        if !project.github_link.starts_with("https://") {
            return Err(CatalogError::InsecureLink { index, link: project.github_link.clone() });
        }
    }
    Ok(projects)
}

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| match parse_catalog(PROJECTS_JSON) {
    Ok(projects) => projects,
    Err(err) => {
        #[cfg(feature = "hydrate")]
        log::error!("bundled project catalog rejected: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
        Vec::new()
    }
});

/// The bundled projects in display order.
#[must_use]
pub fn projects() -> &'static [Project] {
    &PROJECTS
}
