// Tests for startup inputs: config files and seed files

use anyhow::Result;
use crm_meetings::{Config, MeetingFilter, MeetingService, MemoryStore, ObjectId, SeedData};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const SEED: &str = r#"{
    "users": [
        { "_id": "64b7f0c2a1b2c3d4e5f60001", "firstName": "Ada", "lastName": "Admin" }
    ],
    "contacts": [
        { "_id": "64b7f0c2a1b2c3d4e5f61001", "firstName": "Grace", "lastName": "Hopper" }
    ],
    "meetings": [
        {
            "_id": "64b7f0c2a1b2c3d4e5f63001",
            "agenda": "Seeded",
            "attendees": ["64b7f0c2a1b2c3d4e5f61001"],
            "createdBy": "64b7f0c2a1b2c3d4e5f60001"
        }
    ]
}"#;

#[tokio::test]
async fn test_seed_file_populates_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seed.json");
    fs::write(&path, SEED)?;

    let seed = SeedData::from_file(&path).await?;
    let store = Arc::new(MemoryStore::new());
    let summary = store.load_seed(seed).await;

    assert_eq!(summary.users, 1);
    assert_eq!(summary.contacts, 1);
    assert_eq!(summary.leads, 0);
    assert_eq!(summary.meetings, 1);

    let service = MeetingService::new(store.clone());
    let id: ObjectId = "64b7f0c2a1b2c3d4e5f63001".parse()?;
    let viewed = service.view(id).await?;

    assert_eq!(viewed.meeting.agenda.as_deref(), Some("Seeded"));
    assert_eq!(viewed.created_by_name.as_deref(), Some("Ada Admin"));
    assert_eq!(viewed.attendee_names, vec!["Grace Hopper"]);
    assert!(!viewed.meeting.deleted);

    Ok(())
}

#[tokio::test]
async fn test_reseeding_replaces_by_id() -> Result<()> {
    let store = Arc::new(MemoryStore::new());

    store.load_seed(serde_json::from_str(SEED)?).await;
    store.load_seed(serde_json::from_str(SEED)?).await;

    assert_eq!(store.meeting_count().await, 1);

    let service = MeetingService::new(store.clone());
    assert_eq!(service.list(&MeetingFilter::default()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_seed_with_bad_id_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seed.json");
    fs::write(&path, r#"{ "users": [ { "_id": "nope" } ] }"#)?;

    let err = SeedData::from_file(&path).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse seed file"));
    Ok(())
}

#[tokio::test]
async fn test_missing_seed_file_fails() {
    let err = SeedData::from_file("/definitely/not/here.json")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read seed file"));
}

#[test]
#[serial_test::serial]
fn test_config_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("crm-meetings.toml");
    fs::write(
        &path,
        r#"
[service]
name = "crm-meetings-test"

[service.http]
bind = "0.0.0.0"
port = 8088

[store]
seed_path = "seed.json"
"#,
    )?;

    let cfg = Config::load(path.to_str().unwrap())?;

    assert_eq!(cfg.service.name, "crm-meetings-test");
    assert_eq!(cfg.service.http.addr(), "0.0.0.0:8088");
    assert_eq!(cfg.store.seed_path.as_deref(), Some("seed.json"));
    Ok(())
}

#[test]
#[serial_test::serial]
fn test_config_store_section_optional() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("minimal.toml");
    fs::write(
        &path,
        r#"
[service]
name = "minimal"

[service.http]
bind = "127.0.0.1"
port = 5001
"#,
    )?;

    let cfg = Config::load(path.to_str().unwrap())?;

    assert!(cfg.store.seed_path.is_none());
    Ok(())
}

#[test]
#[serial_test::serial]
fn test_bundled_config_parses() -> Result<()> {
    let cfg = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/crm-meetings"))?;
    assert_eq!(cfg.service.name, "crm-meetings");
    Ok(())
}

#[test]
#[serial_test::serial]
fn test_config_env_overrides_file() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/crm-meetings");

    std::env::set_var("CRM_MEETINGS__SERVICE__HTTP__PORT", "47123");
    let loaded = Config::load(path);
    std::env::remove_var("CRM_MEETINGS__SERVICE__HTTP__PORT");

    let cfg = loaded?;
    assert_eq!(cfg.service.http.port, 47123);
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    Ok(())
}
