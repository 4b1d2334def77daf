//! Terminal stand-in for the app's view layer.

use async_trait::async_trait;
use gogo_engine::navigator::{Navigator, NavigatorError, Speaker, SpeechError};
use tracing::info;

pub struct ConsoleNavigator {
    path: String,
    tab_host_path: String,
    host_tabs: Vec<String>,
}

impl ConsoleNavigator {
    pub fn new(start_path: &str, tab_host_path: &str, host_tabs: Vec<String>) -> Self {
        Self {
            path: start_path.to_string(),
            tab_host_path: tab_host_path.to_string(),
            host_tabs,
        }
    }
}

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn current_path(&self) -> String {
        self.path.clone()
    }

    async fn redirect(&mut self, path: &str) -> Result<(), NavigatorError> {
        if !path.starts_with('/') {
            return Err(NavigatorError::InvalidTarget(path.to_string()));
        }
        info!("Page: {} -> {}", self.path, path);
        self.path = path.to_string();
        Ok(())
    }

    async fn activate_tab(&mut self, tab: &str) -> Result<bool, NavigatorError> {
        if self.path != self.tab_host_path || !self.host_tabs.iter().any(|t| t == tab) {
            return Ok(false);
        }
        info!("Tab: {}", tab);
        Ok(true)
    }

    async fn open_external(&mut self, url: &str) -> Result<(), NavigatorError> {
        info!("New tab: {}", url);
        Ok(())
    }
}

pub struct ConsoleSpeaker;

#[async_trait]
impl Speaker for ConsoleSpeaker {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        info!(target: "gogo::speech", "{}", text);
        Ok(())
    }
}
