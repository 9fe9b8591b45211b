// Host-side tests for the API response models and query parsing. The network
// calls themselves only run in a browser; everything here is pure.

#![allow(dead_code)]
mod fetch {
    include!("../src/fetch.rs");
}

use fetch::{project_from_query, PageDetail, PageEntry};

#[test]
fn project_query_parameter_overrides_the_default() {
    assert_eq!(project_from_query("?project=icons", "help-jp"), "icons");
    assert_eq!(
        project_from_query("?foo=1&project=icons&bar=2", "help-jp"),
        "icons"
    );
}

#[test]
fn missing_or_empty_project_falls_back() {
    assert_eq!(project_from_query("", "help-jp"), "help-jp");
    assert_eq!(project_from_query("?foo=1", "help-jp"), "help-jp");
    assert_eq!(project_from_query("?project=", "help-jp"), "help-jp");
}

#[test]
fn page_entry_parses_with_and_without_image() {
    let with: PageEntry =
        serde_json::from_str(r#"{"title":"Home","image":"https://example.test/a.png"}"#).unwrap();
    assert_eq!(with.title, "Home");
    assert_eq!(with.image.as_deref(), Some("https://example.test/a.png"));

    let without: PageEntry = serde_json::from_str(r#"{"title":"Home","image":null}"#).unwrap();
    assert!(without.image.is_none());
}

#[test]
fn page_detail_parses_the_camel_cased_related_pages() {
    let body = r#"{
        "title": "Home",
        "links": ["Setup", "FAQ"],
        "relatedPages": {
            "links1hop": [{"title": "Setup"}, {"title": "Glossary"}]
        }
    }"#;
    let detail: PageDetail = serde_json::from_str(body).unwrap();
    assert_eq!(detail.links, vec!["Setup", "FAQ"]);
    let one_hop: Vec<_> = detail
        .related_pages
        .links1hop
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(one_hop, vec!["Setup", "Glossary"]);
}

#[test]
fn partial_page_detail_defaults_cleanly() {
    let detail: PageDetail = serde_json::from_str(r#"{"title":"Home"}"#).unwrap();
    assert!(detail.links.is_empty());
    assert!(detail.related_pages.links1hop.is_empty());
}
