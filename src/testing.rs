//! Shared fixtures for the in-crate tests.

use std::path::PathBuf;
use std::time::Duration;

use sqlx::any::AnyPoolOptions;

use crate::config::Config;
use crate::db::DbPool;
use crate::model::attendance::AttendanceRecord;
use crate::repository;

const SQLITE_SCHEMA: &str = r#"
    CREATE TABLE attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        dob TEXT NOT NULL,
        phone TEXT NOT NULL,
        address TEXT NOT NULL,
        course_name TEXT NOT NULL,
        course_length TEXT NOT NULL,
        graduation_date TEXT NOT NULL,
        tutor_name TEXT NOT NULL,
        time_in TEXT NOT NULL,
        time_out TEXT NOT NULL,
        absence_reason TEXT NOT NULL,
        camera_status TEXT NOT NULL
    )
"#;

/// In-memory SQLite with no tables. One connection that never expires, since
/// every new connection would see a fresh empty database.
pub async fn empty_pool() -> DbPool {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite")
}

pub async fn memory_pool() -> DbPool {
    let pool = empty_pool().await;
    sqlx::query(SQLITE_SCHEMA)
        .execute(&pool)
        .await
        .expect("create attendance table");
    pool
}

/// Inserts `record` and returns the id the database gave it.
pub async fn insert(pool: &DbPool, record: &AttendanceRecord) -> i64 {
    assert_eq!(repository::upsert(pool, record).await.expect("insert record"), 1);
    repository::list_all(pool)
        .await
        .expect("list records")
        .iter()
        .map(|r| r.id)
        .max()
        .expect("inserted row is listed")
}

pub fn record(first_name: &str, last_name: &str) -> AttendanceRecord {
    AttendanceRecord {
        id: 0,
        first_name: first_name.into(),
        last_name: last_name.into(),
        dob: "2001-04-12".into(),
        phone: "555-0100".into(),
        address: "1 Main St".into(),
        course_name: "Welding".into(),
        course_length: "12 weeks".into(),
        graduation_date: "2026-12-18".into(),
        tutor_name: "Ms Smith".into(),
        time_in: "09:00".into(),
        time_out: "15:00".into(),
        absence_reason: String::new(),
        camera_status: "on".into(),
    }
}

pub fn crate_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(name)
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        server_addr: "127.0.0.1:0".into(),
        db_max_connections: 1,
        template_dir: crate_dir("templates").display().to_string(),
        static_dir: crate_dir("static").display().to_string(),
        log_dir: "logs".into(),
        log_level: tracing::Level::DEBUG,
    }
}
