//! Tests for the panel over the JSON file store and device snapshot

use std::sync::Arc;

use tempfile::TempDir;

use panel_settings::config::PanelConfig;
use panel_settings::devices::JsonDeviceProvider;
use panel_settings::panel::{PanelSession, SettingsResolver};
use panel_settings::settings::{DefaultValues, Language};
use panel_settings::store::{JsonFileStore, KeyValueStore};

use crate::common::RecordingHost;

fn file_resolver(config: &PanelConfig) -> Arc<SettingsResolver> {
    Arc::new(SettingsResolver::new(
        Arc::new(JsonFileStore::new(&config.store_path)),
        Arc::new(JsonDeviceProvider::new(config.devices_path.clone())),
        &config.defaults,
    ))
}

#[tokio::test]
async fn test_save_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let config = PanelConfig {
        store_path: dir.path().join("storage.json"),
        devices_path: None,
        defaults: DefaultValues {
            model: Some("gemini-2.0-flash-exp".to_string()),
            ..Default::default()
        },
    };

    let mut session = PanelSession::open(file_resolver(&config), RecordingHost::default()).await;
    assert_eq!(session.record().model, "gemini-2.0-flash-exp");
    session.set_secondary_key("el-123");
    session.set_language(Language::Zh);
    session.save().await.unwrap();
    assert_eq!(session.host().back_calls, 1);

    let reopened = PanelSession::open(file_resolver(&config), RecordingHost::default()).await;
    assert_eq!(reopened.record(), session.record());

    let on_disk = JsonFileStore::new(&config.store_path)
        .get(&["elevenLabsKey", "model", "language"])
        .await
        .unwrap();
    assert_eq!(on_disk["elevenLabsKey"], "el-123");
    assert_eq!(on_disk["model"], "gemini-2.0-flash-exp");
    assert_eq!(on_disk["language"], "zh");
}

#[tokio::test]
async fn test_device_snapshot_feeds_selector() {
    let dir = TempDir::new().unwrap();
    let devices_path = dir.path().join("devices.json");
    std::fs::write(
        &devices_path,
        r#"[
            {"id": "abcdef1234567890", "label": "", "kind": "audioinput"},
            {"id": "out-1", "label": "Speakers", "kind": "audiooutput"}
        ]"#,
    )
    .unwrap();

    let config = PanelConfig {
        store_path: dir.path().join("storage.json"),
        devices_path: Some(devices_path),
        defaults: DefaultValues::default(),
    };

    let session = PanelSession::open(file_resolver(&config), RecordingHost::default()).await;
    let labels: Vec<String> = session.device_options().into_iter().map(|o| o.label).collect();
    assert_eq!(labels, vec!["Default", "Device abcdef12"]);
}

#[tokio::test]
async fn test_unreadable_store_still_opens() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("storage.json");
    std::fs::write(&store_path, "{ broken").unwrap();

    let config = PanelConfig {
        store_path,
        devices_path: None,
        defaults: DefaultValues::default(),
    };

    let mut session = PanelSession::open(file_resolver(&config), RecordingHost::default()).await;
    assert!(session.is_settings_loaded());
    assert_eq!(session.record().model, "gemini-3-flash");

    // Saving replaces the broken file
    session.set_api_key("sk-fresh");
    session.save().await.unwrap();
    let reopened = PanelSession::open(file_resolver(&config), RecordingHost::default()).await;
    assert_eq!(reopened.record().api_key, "sk-fresh");
}
