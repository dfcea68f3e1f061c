use std::fs;

use hilight::tags::{Catalog, ProductMatcher, TagsByCategory};
use hilight::{best_product, Config};
use tempfile::TempDir;

const CATALOG: &str = r##"{
    "product_tags": {
        "A": {
            "tags": {"위험": ["#화재손해", "#배상책임"]},
            "summary": "화재와 배상책임을 함께 보장"
        },
        "B": {
            "tags": {"누구": ["#반려견"], "위험": ["#슬개골"]},
            "summary": "반려견 의료비 보장"
        }
    }
}"##;

fn selection(category: &str, tags: &[&str]) -> TagsByCategory {
    let mut selected = TagsByCategory::new();
    selected.insert(
        category.to_string(),
        tags.iter().map(|t| t.to_string()).collect(),
    );
    selected
}

#[test]
fn fire_and_liability_recommends_product_a() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let selected = selection("위험", &["#화재", "#배상책임"]);

    let ranked = ProductMatcher::new(&catalog).rank(&selected);
    assert_eq!(ranked[0].name, "A");
    assert_eq!(ranked[0].score, 2.0);
    assert_eq!(best_product(&catalog, &selected), Some("A".to_string()));
}

#[test]
fn empty_selection_recommends_nothing() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    assert_eq!(best_product(&catalog, &TagsByCategory::new()), None);
}

#[test]
fn empty_catalog_recommends_nothing() {
    let catalog = Catalog::from_json_str(r#"{"product_tags": {}}"#).unwrap();
    let selected = selection("위험", &["#화재", "#배상책임"]);
    assert_eq!(best_product(&catalog, &selected), None);
}

#[test]
fn missing_catalog_file_fails_closed() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&dir.path().join("catalog_tags.json"));
    let selected = selection("위험", &["#화재", "#배상책임"]);
    assert_eq!(best_product(&catalog, &selected), None);
}

#[test]
fn configured_threshold_is_applied() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("catalog_tags.json"), CATALOG).unwrap();
    fs::write(
        dir.path().join(".hilight.json"),
        r#"{"matching": {"threshold": 2.5}}"#,
    )
    .unwrap();

    let config = Config::load(dir.path());
    let catalog = Catalog::load(&config.catalog_path(dir.path()));
    assert_eq!(catalog.len(), 2);

    let selected = selection("위험", &["#화재", "#배상책임"]);
    let matcher = ProductMatcher::with_config(&catalog, &config.matching);
    assert_eq!(matcher.best_product(&selected), None);
    assert_eq!(
        ProductMatcher::new(&catalog).best_product(&selected),
        Some("A".to_string())
    );
}

#[test]
fn summary_follows_recommendation() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let selected = selection("위험", &["#화재", "#배상책임"]);
    let product = best_product(&catalog, &selected).unwrap();
    assert_eq!(catalog.summary_for(&product), Some("화재와 배상책임을 함께 보장"));
}
