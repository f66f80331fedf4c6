//! Filesystem tests for the processed-data loader.

use fundmatch_analytics::loader::{DataStore, IDEAS_PATTERN, MATCHES_PATTERN};
use serde_json::json;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    std::fs::write(dir.path().join(name), contents).unwrap();
}

#[tokio::test]
async fn loads_arrays_and_single_objects() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "faculty_funding_matches_20250131_120000.json",
        &json!([{"match_id": "m1"}, {"match_id": "m2"}]).to_string(),
    );
    write(
        &dir,
        "faculty_funding_matches_single.json",
        &json!({"match_id": "m3"}).to_string(),
    );

    let store = DataStore::new(dir.path());
    let records = store.load(MATCHES_PATTERN).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn malformed_file_does_not_abort_the_load() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "faculty_funding_matches_good.json",
        &json!([{"match_id": "m1"}, {"match_id": "m2"}]).to_string(),
    );
    write(&dir, "faculty_funding_matches_bad.json", "invalid json {");

    let store = DataStore::new(dir.path());
    let records = store.load(MATCHES_PATTERN).await.unwrap();
    // Only the bad file's contribution is lost.
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn scalar_json_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(&dir, "faculty_funding_matches_scalar.json", "42");
    write(
        &dir,
        "faculty_funding_matches_ok.json",
        &json!([{"match_id": "m1"}]).to_string(),
    );

    let store = DataStore::new(dir.path());
    let records = store.load(MATCHES_PATTERN).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn patterns_only_match_their_own_collection() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "faculty_funding_matches_a.json",
        &json!([{"match_id": "m1"}]).to_string(),
    );
    write(
        &dir,
        "research_ideas_a.json",
        &json!([{"title": "i1"}, {"title": "i2"}]).to_string(),
    );

    let store = DataStore::new(dir.path());
    assert_eq!(store.load(MATCHES_PATTERN).await.unwrap().len(), 1);
    assert_eq!(store.load(IDEAS_PATTERN).await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_directory_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());
    assert!(store.load(MATCHES_PATTERN).await.unwrap().is_empty());
    assert!(store.matches().await.unwrap().is_empty());
}
