use super::*;

#[test]
fn bundled_catalog_has_three_projects_in_order() {
    let titles = projects().iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Food Delivery App", "YouTube Clone", "RKShopCart E-commerce"]);
}

#[test]
fn bundled_catalog_passes_validation() {
    let parsed = parse_catalog(PROJECTS_JSON).expect("bundled catalog should be valid");
    assert_eq!(parsed, projects());
}

#[test]
fn technologies_keep_their_order() {
    assert_eq!(projects()[1].technologies, vec!["HTML", "CSS", "JavaScript"]);
    assert_eq!(projects()[0].technologies.last().map(String::as_str), Some("Next.js"));
}

#[test]
fn image_urls_mix_local_and_cdn_assets() {
    assert!(projects()[0].image_url.starts_with("/lovable-uploads/"));
    assert!(projects()[1].image_url.starts_with("https://cdn.jsdelivr.net/"));
}

#[test]
fn project_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(&projects()[2]).expect("serialize");
    assert_eq!(value["githubLink"], "https://github.com/JalapatiRavikumar/rkshopcart/tree/main");
    assert!(value.get("imageUrl").is_some());
    assert!(value.get("image_url").is_none());
}

#[test]
fn parse_catalog_rejects_malformed_json() {
    assert!(matches!(parse_catalog("[{"), Err(CatalogError::Parse(_))));
}

#[test]
fn parse_catalog_rejects_empty_title() {
    let raw = r#"[{"title":" ","description":"d","imageUrl":"/i.png","technologies":[],"githubLink":"https://x"}]"#;
    let err = parse_catalog(raw).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyField { index: 0, field: "title" }));
}

#[test]
fn parse_catalog_rejects_plain_http_links() {
    let raw = r#"[{"title":"t","description":"d","imageUrl":"/i.png","technologies":[],"githubLink":"http://x"}]"#;
    let err = parse_catalog(raw).unwrap_err();
    assert!(err.to_string().contains("non-https"));
}

#[test]
fn contact_details_list_phone_location_email() {
    let labels = CONTACT_DETAILS.iter().map(|d| d.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Phone", "Location", "Email"]);
    assert_eq!(CONTACT_DETAILS[2].value, CONTACT_EMAIL);
}
