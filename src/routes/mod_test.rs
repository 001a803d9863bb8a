use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

fn project(image_url: &str) -> Project {
    Project {
        title: "Demo".into(),
        description: "Demo project".into(),
        image_url: image_url.into(),
        technologies: vec!["Rust".into()],
        github_link: "https://github.com/example/demo".into(),
    }
}

#[test]
fn missing_local_images_reports_absent_files_only() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("uploads")).unwrap();
    std::fs::write(dir.path().join("uploads/present.png"), b"png").unwrap();

    let projects = vec![
        project("/uploads/present.png"),
        project("/uploads/absent.png"),
        project("https://cdn.example.com/shot.png"),
    ];

    assert_eq!(missing_local_images(&projects, dir.path()), vec!["/uploads/absent.png"]);
}

#[test]
fn bundled_catalog_images_need_an_assets_dir() {
    // `public/` ships only the favicon; screenshots come from ASSETS_DIR.
    let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
    let missing = missing_local_images(client::site::projects(), &public);

    assert_eq!(missing.len(), 2);
    assert!(missing.iter().all(|url| url.starts_with("/lovable-uploads/")));
}

#[test]
fn projects_section_renders_cards_in_catalog_order() {
    use client::components::projects::ProjectsSection;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| view! { <ProjectsSection/> }.to_html());

    let positions = client::site::projects()
        .iter()
        .map(|p| html.find(p.title.as_str()))
        .collect::<Option<Vec<_>>>()
        .expect("every project title rendered");
    assert_eq!(positions.len(), 3);
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "cards out of order: {positions:?}");
    assert!(html.contains(r#"rel="noopener noreferrer""#));
}
