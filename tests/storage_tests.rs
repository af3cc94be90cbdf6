use chrono::NaiveDate;
use drawboard::db::Storage;
use drawboard::types::slots::TIME_SLOTS;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

async fn spawn_storage(tag: &str) -> (Storage, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "drawboard-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = drawboard::db::connect(&database_url)
        .await
        .expect("failed to open test database");
    (storage, temp_path)
}

fn date(s: &str) -> NaiveDate {
    s.parse().expect("test date")
}

#[tokio::test]
async fn previous_cap_is_deterministic_on_the_boundary_date() {
    let (storage, temp_path) = spawn_storage("previous-cap").await;

    // 16 full boards before the pivot, then a limit that slices into the
    // oldest surviving day.
    let pivot = date("2026-08-24");
    for day in 8..=23u32 {
        let d = date(&format!("2026-08-{day:02}"));
        for slot in TIME_SLOTS {
            storage
                .upsert_result(d, slot, 1, 2)
                .await
                .expect("failed to store result");
        }
    }

    let rows = storage
        .results_before(pivot, 118)
        .await
        .expect("failed to query previous results");

    assert_eq!(rows.len(), 118);
    assert!(rows.iter().all(|r| r.result_date > date("2026-08-08")));

    // The boundary date keeps the 6 slots whose labels sort first; without
    // a secondary ORDER BY key the surviving slots would be up to the
    // database.
    let boundary: Vec<&str> = rows
        .iter()
        .filter(|r| r.result_date == date("2026-08-09"))
        .map(|r| r.time_slot.as_str())
        .collect();
    assert_eq!(boundary.len(), 6);
    assert!(!boundary.contains(&"10:30 AM"));
    assert!(!boundary.contains(&"12:00 PM"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn upsert_keeps_one_row_per_date_and_slot() {
    let (storage, temp_path) = spawn_storage("upsert-key").await;

    let d = date("2026-08-20");
    let first = storage
        .upsert_result(d, "10:30 AM", 7, 42)
        .await
        .expect("failed to store result");
    let second = storage
        .upsert_result(d, "10:30 AM", 11, 22)
        .await
        .expect("failed to store result");

    assert_eq!(first.id, second.id);
    assert_eq!(second.number_1, 11);

    let rows = storage
        .results_for_date(d)
        .await
        .expect("failed to query results");
    assert_eq!(rows.len(), 1);

    let _ = fs::remove_file(&temp_path);
}
