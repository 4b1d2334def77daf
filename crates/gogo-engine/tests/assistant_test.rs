mod common;

use async_trait::async_trait;
use common::FakeNavigator;
use gogo_common::{Category, NavAction};
use gogo_engine::assistant::Assistant;
use gogo_engine::config::AssistantConfig;
use gogo_engine::monitor::{InteractionStore, MemoryStore};
use gogo_engine::navigator::{NavigatorError, Speaker, SpeechError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn assistant_at(path: &str) -> (Assistant<FakeNavigator>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let assistant = Assistant::new(
        &AssistantConfig::default(),
        FakeNavigator::at(path),
        store.clone(),
    );
    (assistant, store)
}

#[tokio::test]
async fn test_handle_app_navigation() {
    let (mut assistant, store) = assistant_at("/");

    let reply = assistant.handle("go to the cargo page").await;

    assert_eq!(reply.category, Category::AppNavigation);
    assert_eq!(reply.detail, "cargo");
    assert!(reply.success);
    assert!(reply.resolved);
    assert_eq!(
        reply.actions,
        vec![NavAction::RedirectPage {
            path: "/cargo".into()
        }]
    );
    assert_eq!(assistant.navigator().path, "/cargo");

    let logs = store.load().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].command, "go to the cargo page");
    assert_eq!(logs[0].category, Category::AppNavigation);
    assert!(logs[0].success);
    assert!(logs[0].error.is_none());
    assert_eq!(logs[0].response, reply.response);
}

#[tokio::test]
async fn test_tab_request_then_activation() {
    let (mut assistant, _store) = assistant_at("/map");

    let first = assistant.handle("open the bus tab").await;
    assert_eq!(first.category, Category::TabControl);
    assert_eq!(assistant.navigator().path, "/transport");

    let second = assistant.handle("open the bus tab").await;
    assert_eq!(
        second.actions,
        vec![NavAction::ActivateTab { tab: "bus".into() }]
    );
}

#[tokio::test]
async fn test_unknown_command_is_logged_as_success() {
    let (mut assistant, store) = assistant_at("/");

    let reply = assistant.handle("asdkjhasdkjh").await;

    assert_eq!(reply.category, Category::Unknown);
    assert!(reply.success);
    assert!(!reply.resolved);
    assert!(reply.response.starts_with("I didn't understand"));
    assert_eq!(store.load().unwrap()[0].category, Category::Unknown);
}

#[tokio::test]
async fn test_processing_failure_is_recovered() {
    let store = Arc::new(MemoryStore::new());
    let mut assistant = Assistant::new(
        &AssistantConfig::default(),
        FakeNavigator::failing(NavigatorError::Blocked("popup blocked".into())),
        store.clone(),
    );

    let reply = assistant.handle("search the web for weather in Oslo").await;

    assert_eq!(reply.category, Category::WebNavigation);
    assert!(!reply.success);
    assert!(reply.response.starts_with("Sorry"));
    assert!(reply.actions.is_empty());

    let logs = store.load().unwrap();
    assert_eq!(logs.len(), 1);
    assert!(!logs[0].success);
    assert!(logs[0].error.as_deref().unwrap().contains("popup blocked"));
}

#[tokio::test]
async fn test_identity_attached_to_logs() {
    let (assistant, store) = assistant_at("/");
    let mut assistant =
        assistant.with_identity(Some("rider-42".into()), Some("session-7".into()));

    assistant.handle("help").await;

    let logs = store.load().unwrap();
    assert_eq!(logs[0].user_id.as_deref(), Some("rider-42"));
    assert_eq!(logs[0].session_id.as_deref(), Some("session-7"));
}

#[tokio::test]
async fn test_logging_disabled() {
    let mut config = AssistantConfig::default();
    config.features.logging_enabled = false;
    let store = Arc::new(MemoryStore::new());
    let mut assistant = Assistant::new(&config, FakeNavigator::at("/"), store.clone());

    assistant.handle("find coffee shops").await;

    assert!(store.load().unwrap().is_empty());
}

struct ChannelSpeaker {
    tx: mpsc::UnboundedSender<String>,
}

#[async_trait]
impl Speaker for ChannelSpeaker {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        self.tx
            .send(text.to_string())
            .map_err(|e| SpeechError(e.to_string()))
    }
}

#[tokio::test]
async fn test_voice_reply_is_spoken() {
    let mut config = AssistantConfig::default();
    config.features.voice_enabled = true;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut assistant = Assistant::new(
        &config,
        FakeNavigator::at("/"),
        Arc::new(MemoryStore::new()),
    )
    .with_speaker(Arc::new(ChannelSpeaker { tx }));

    let reply = assistant.handle("find coffee shops").await;

    let spoken = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("speech was not triggered")
        .unwrap();
    assert_eq!(spoken, reply.response);
}

#[tokio::test]
async fn test_voice_disabled_stays_silent() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut assistant = Assistant::new(
        &AssistantConfig::default(),
        FakeNavigator::at("/"),
        Arc::new(MemoryStore::new()),
    )
    .with_speaker(Arc::new(ChannelSpeaker { tx }));

    assistant.handle("find coffee shops").await;
    drop(assistant);

    assert!(rx.recv().await.is_none());
}
