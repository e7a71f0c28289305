//! Tests for the PanelSession load / edit / save lifecycle

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use panel_settings::devices::{DeviceOption, SelectedDevice};
use panel_settings::panel::{PanelError, PanelLoad, PanelSession, SaveStatus};
use panel_settings::settings::{DefaultValues, Language, SettingsField};
use panel_settings::store::MemoryStore;

use crate::common::{RecordingHost, ScriptedDevices, SlowStore, resolver, stored, two_devices};

#[tokio::test]
async fn test_open_applies_settings_and_devices() {
    let store = Arc::new(MemoryStore::with_values(stored(json!({
        "apiKey": "sk-1",
        "selectedDeviceId": "abcdef1234567890",
    }))));
    let resolver = resolver(store, ScriptedDevices::ok(two_devices()), DefaultValues::default());

    let session = PanelSession::open(resolver, RecordingHost::default()).await;

    assert!(session.is_settings_loaded());
    assert!(session.is_devices_loaded());
    assert_eq!(session.record().api_key, "sk-1");
    assert_eq!(session.devices().len(), 2);
    assert_eq!(
        session.selected_device(),
        SelectedDevice::Known(DeviceOption {
            id: "abcdef1234567890".to_string(),
            label: "Device abcdef12".to_string(),
        })
    );
    assert_eq!(session.host().back_calls, 0);
}

#[tokio::test]
async fn test_unlabeled_device_option() {
    let resolver = resolver(
        Arc::new(MemoryStore::new()),
        ScriptedDevices::ok(two_devices()),
        DefaultValues::default(),
    );
    let session = PanelSession::open(resolver, RecordingHost::default()).await;

    let labels: Vec<String> = session.device_options().into_iter().map(|o| o.label).collect();
    assert_eq!(labels, vec!["Default", "USB Microphone", "Device abcdef12"]);
}

#[tokio::test]
async fn test_settings_applied_before_slow_device_enumeration() {
    let store = Arc::new(MemoryStore::with_values(stored(json!({ "model": "stored" }))));
    let resolver = resolver(
        store,
        ScriptedDevices::ok(two_devices()).delayed(Duration::from_millis(50)),
        DefaultValues::default(),
    );

    let mut order = Vec::new();
    let session = PanelSession::open_observed(resolver, RecordingHost::default(), |load, s| {
        if load == PanelLoad::Settings {
            assert_eq!(s.record().model, "stored");
            assert!(!s.is_devices_loaded());
        }
        order.push(load);
    })
    .await;

    assert_eq!(order, vec![PanelLoad::Settings, PanelLoad::Devices]);
    assert_eq!(session.devices().len(), 2);
}

#[tokio::test]
async fn test_devices_applied_before_slow_store_read() {
    let inner = Arc::new(MemoryStore::with_values(stored(json!({ "language": "zh" }))));
    let store = Arc::new(SlowStore::new(inner, Duration::from_millis(50)));
    let resolver = resolver(store, ScriptedDevices::ok(two_devices()), DefaultValues::default());

    let mut order = Vec::new();
    let session = PanelSession::open_observed(resolver, RecordingHost::default(), |load, s| {
        if load == PanelLoad::Devices {
            assert!(!s.is_settings_loaded());
            assert_eq!(s.device_options().len(), 3);
        }
        order.push(load);
    })
    .await;

    assert_eq!(order, vec![PanelLoad::Devices, PanelLoad::Settings]);
    assert_eq!(session.record().language, Language::Zh);
}

#[tokio::test]
async fn test_device_failure_leaves_only_default_option() {
    let store = Arc::new(MemoryStore::with_values(stored(json!({
        "selectedDeviceId": "mic-usb-0001",
    }))));
    let resolver = resolver(store, ScriptedDevices::failing("denied"), DefaultValues::default());

    let session = PanelSession::open(resolver, RecordingHost::default()).await;

    assert!(session.is_devices_loaded());
    assert_eq!(session.device_options().len(), 1);
    assert_eq!(session.record().selected_device_id, "mic-usb-0001");
    assert_eq!(
        session.selected_device(),
        SelectedDevice::Unresolved("mic-usb-0001".to_string())
    );
}

#[tokio::test]
async fn test_toggling_visibility_does_not_change_value() {
    let store = Arc::new(MemoryStore::with_values(stored(json!({ "apiKey": "sk-secret" }))));
    let resolver = resolver(
        store.clone(),
        ScriptedDevices::ok(two_devices()),
        DefaultValues::default(),
    );
    let mut session = PanelSession::open(resolver, RecordingHost::default()).await;
    let before = session.record().clone();

    assert_ne!(session.display_value(SettingsField::ApiKey), "sk-secret");
    session.toggle_api_key_visibility();
    assert_eq!(session.display_value(SettingsField::ApiKey), "sk-secret");
    session.toggle_api_key_visibility();
    assert!(!session.is_visible(SettingsField::ApiKey));

    assert_eq!(session.record(), &before);
    assert_eq!(store.snapshot()["apiKey"], "sk-secret");
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn test_edits_touch_only_their_field() {
    let resolver = resolver(
        Arc::new(MemoryStore::new()),
        ScriptedDevices::ok(Vec::new()),
        DefaultValues {
            model: Some("gemini-2.0-flash-exp".to_string()),
            ..Default::default()
        },
    );
    let mut session = PanelSession::open(resolver, RecordingHost::default()).await;

    session.set_base_url("https://y.test/v1");
    assert_eq!(session.record().model, "gemini-2.0-flash-exp");

    session.set_language(Language::Zh);
    session.select_device("mic-usb-0001");
    assert_eq!(session.record().base_url, "https://y.test/v1");
    assert_eq!(session.record().api_key, "");
}

#[tokio::test]
async fn test_save_persists_and_navigates_back_once() {
    let store = Arc::new(MemoryStore::new());
    let resolver = resolver(
        store.clone(),
        ScriptedDevices::ok(two_devices()),
        DefaultValues::default(),
    );
    let mut session = PanelSession::open(resolver, RecordingHost::default()).await;

    session.select_device("abcdef1234567890");
    session.save().await.unwrap();

    assert_eq!(session.host().back_calls, 1);
    assert_eq!(session.save_status(), &SaveStatus::Saved);
    assert!(session.is_closed());

    let writes = store.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].len(), 6);
    assert_eq!(writes[0]["selectedDeviceId"], "abcdef1234567890");

    assert!(matches!(session.save().await, Err(PanelError::Closed)));
    assert_eq!(session.host().back_calls, 1);
}

#[tokio::test]
async fn test_failed_save_does_not_navigate() {
    let store = Arc::new(MemoryStore::new());
    store.set_fail_writes(true);
    let resolver = resolver(
        store.clone(),
        ScriptedDevices::ok(Vec::new()),
        DefaultValues::default(),
    );
    let mut session = PanelSession::open(resolver, RecordingHost::default()).await;
    session.set_api_key("sk-new");

    let result = session.save().await;

    assert!(matches!(result, Err(PanelError::SaveFailed(_))));
    assert_eq!(session.host().back_calls, 0);
    assert!(session.save_status().is_failed());
    assert!(!session.is_closed());
    assert_eq!(session.record().api_key, "sk-new");

    // Retry once the store recovers
    store.set_fail_writes(false);
    session.save().await.unwrap();
    assert_eq!(session.host().back_calls, 1);
    assert_eq!(store.snapshot()["apiKey"], "sk-new");
}

#[tokio::test]
async fn test_back_without_saving() {
    let store = Arc::new(MemoryStore::new());
    let resolver = resolver(
        store.clone(),
        ScriptedDevices::ok(Vec::new()),
        DefaultValues::default(),
    );
    let mut session = PanelSession::open(resolver, RecordingHost::default()).await;
    session.set_model("edited");

    session.back().unwrap();

    assert_eq!(session.host().back_calls, 1);
    assert!(store.writes().is_empty());
}
