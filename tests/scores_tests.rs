//! High-score table and persistence tests

use std::fs;
use std::path::PathBuf;

use termtris::scores::{HighScoreTable, ScoreStore};

fn temp_score_path(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("termtris_{}_{}.txt", tag, std::process::id()));
    path
}

#[test]
fn test_insert_keeps_descending_order() {
    let mut table = HighScoreTable::new();
    table.insert("low", 5);
    table.insert("high", 50);
    table.insert("mid", 20);

    let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![50, 20, 5]);
    assert_eq!(table.best(), Some(50));
}

#[test]
fn test_table_truncates_to_ten() {
    let mut table = HighScoreTable::new();
    for i in 0..15u32 {
        table.insert(&format!("p{i}"), i);
    }
    assert_eq!(table.entries().len(), 10);
    // The five lowest scores fell off the end.
    assert_eq!(table.entries().last().map(|e| e.score), Some(5));
}

#[test]
fn test_ties_keep_insertion_order() {
    let mut table = HighScoreTable::new();
    table.insert("first", 30);
    table.insert("second", 30);

    let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_load_missing_file_is_empty() {
    let store = ScoreStore::new(temp_score_path("missing"));
    assert!(store.load().is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_score_path("roundtrip");
    let store = ScoreStore::new(path.clone());

    let mut table = HighScoreTable::new();
    table.insert("alice", 120);
    table.insert("bob the builder", 80);
    store.save(&table).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.entries().len(), 2);
    assert_eq!(loaded.entries()[0].name, "alice");
    assert_eq!(loaded.entries()[0].score, 120);
    // Names with spaces survive because the score is the final token.
    assert_eq!(loaded.entries()[1].name, "bob the builder");
    assert_eq!(loaded.entries()[1].score, 80);

    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_skips_malformed_lines() {
    let path = temp_score_path("malformed");
    fs::write(&path, "alice 100\nnot-a-record\nbob NaN\n\ncarol 40\n").unwrap();

    let store = ScoreStore::new(path.clone());
    let table = store.load();
    assert_eq!(table.entries().len(), 2);
    assert_eq!(table.entries()[0].name, "alice");
    assert_eq!(table.entries()[1].name, "carol");

    fs::remove_file(path).unwrap();
}

#[test]
fn test_save_into_bad_path_is_an_error() {
    let store = ScoreStore::new(PathBuf::from("/nonexistent-dir/scores.txt"));
    assert!(store.save(&HighScoreTable::new()).is_err());
}
