//! Integration tests for the public API
//!
//! Tests the full flow: options → model → link set / URIs / HTML

use page_links::{Error, PaginationModel, PaginationOptions, SlotKey};
use pretty_assertions::assert_eq;

fn labels(model: &PaginationModel) -> Vec<String> {
    model
        .link_set()
        .iter()
        .map(|link| link.label.clone())
        .collect()
}

// ============================================================================
// Page Math
// ============================================================================

#[test]
fn test_total_pages_and_offset_properties() {
    for items in [0_i64, 1, 19, 20, 21, 99, 100, 101, 12_345] {
        for per_page in [1_i64, 7, 20, 100] {
            let mut model = PaginationModel::new();
            model
                .set_total_items(items)
                .unwrap()
                .set_items_per_page(per_page)
                .unwrap();

            let expected = (items as u64).div_ceil(per_page as u64);
            assert_eq!(model.total_pages(), expected, "{items} items / {per_page}");

            for page in [1_i64, 2, 5, 40] {
                model.set_page(page).unwrap();
                assert_eq!(model.offset(), ((page - 1) * per_page) as u64);
            }
        }
    }
}

// ============================================================================
// Link Sets
// ============================================================================

#[test]
fn test_first_page_of_five() {
    let model = PaginationModel::from_options(&PaginationOptions {
        items: Some(100),
        per_page: Some(20),
        page: Some(1),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(model.total_pages(), 5);
    assert_eq!(model.offset(), 0);
    assert_eq!(
        labels(&model),
        vec!["&laquo;", "1", "2", "3", "4", "5", "&raquo;"]
    );

    let links = model.link_set();
    assert!(links.get(SlotKey::Prev).unwrap().is_disabled);
    assert!(!links.get(SlotKey::Next).unwrap().is_disabled);
    assert!(links.get(SlotKey::Page(1)).unwrap().is_current);
}

#[test]
fn test_middle_of_fifty_pages() {
    let model = PaginationModel::from_options(&PaginationOptions {
        items: Some(1000),
        per_page: Some(20),
        page: Some(25),
        proximity: Some(2),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(model.total_pages(), 50);
    assert_eq!(
        labels(&model),
        vec![
            "&laquo;", "1", "&hellip;", "24", "25", "26", "&hellip;", "50", "&raquo;"
        ]
    );

    let links = model.link_set();
    assert!(!links.get(SlotKey::Prev).unwrap().is_disabled);
    assert!(!links.get(SlotKey::Next).unwrap().is_disabled);
    assert_eq!(links.iter().filter(|l| l.is_current).count(), 1);
}

#[test]
fn test_walk_every_page() {
    let mut model = PaginationModel::new();
    model
        .set_total_items(230)
        .unwrap()
        .set_items_per_page(10)
        .unwrap()
        .set_uri("/list");

    for page in 1..=23 {
        model.set_page(page).unwrap();
        let links = model.link_set();

        let current: Vec<_> = links.iter().filter(|l| l.is_current).collect();
        assert_eq!(current.len(), 1, "page {page}");
        assert_eq!(current[0].page, Some(page as u64));

        let numbers = links.page_numbers();
        assert_eq!(numbers.first(), Some(&1));
        assert_eq!(numbers.last(), Some(&23));
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "page {page}");
    }
}

#[test]
fn test_no_items() {
    let mut model = PaginationModel::new();
    model.set_total_items(0).unwrap();

    let links = model.link_set();
    assert_eq!(links.keys(), vec![SlotKey::Prev, SlotKey::Next]);
    assert_eq!(model.render(), "");
}

// ============================================================================
// URIs
// ============================================================================

#[test]
fn test_query_pattern_round_trip() {
    let mut model = PaginationModel::new();
    model.set_uri("/posts?page=3").set_pattern("page={page}").unwrap();

    assert_eq!(model.create_link(5), "/posts?page=5");
    assert_eq!(model.page(), 3);
}

#[test]
fn test_path_pattern() {
    let mut model = PaginationModel::new();
    model.set_uri("/posts").set_pattern("page/{page}").unwrap();
    assert_eq!(model.create_link(2), "/posts/page/2");
}

#[test]
fn test_links_keep_other_query_parameters() {
    let model = PaginationModel::from_options(&PaginationOptions {
        items: Some(100),
        uri: Some("/search?q=rust&page=2&sort=new".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(model.page(), 2);
    let links = model.link_set();
    assert_eq!(
        links.get(SlotKey::Next).unwrap().uri,
        "/search?q=rust&page=3&sort=new"
    );
    assert_eq!(
        links.get(SlotKey::Prev).unwrap().uri,
        "/search?q=rust&page=1&sort=new"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_zero_items_per_page_rejected() {
    let mut model = PaginationModel::new();
    let result = model.set_items_per_page(0);
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert_eq!(model.items_per_page(), 20);
}

#[test]
fn test_options_from_yaml() {
    let options = PaginationOptions::from_yaml_str(
        "total: 45\nper_page: 10\nuri: /archive/page/4\npattern: page/{page}\nunknown: true\n",
    )
    .unwrap();
    let model = PaginationModel::from_options(&options).unwrap();

    assert_eq!(model.total_pages(), 5);
    assert_eq!(model.page(), 4);
    assert_eq!(model.offset(), 30);
    assert_eq!(model.create_link(5), "/archive/page/5");
}

#[test]
fn test_invalid_options_from_json() {
    let options = PaginationOptions::from_json_str(r#"{"items": -10}"#).unwrap();
    let err = PaginationModel::from_options(&options).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("total_items"));
}
