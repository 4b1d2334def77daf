#![allow(dead_code)]

use async_trait::async_trait;
use gogo_common::NavAction;
use gogo_engine::navigator::{Navigator, NavigatorError};

/// A navigator that records every side effect instead of performing it.
#[derive(Debug)]
pub struct FakeNavigator {
    pub path: String,
    pub tabs_on_page: Vec<String>,
    pub performed: Vec<NavAction>,
    pub fail_with: Option<NavigatorError>,
}

impl FakeNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            tabs_on_page: vec!["bus".into(), "train".into(), "metro".into(), "tram".into()],
            performed: Vec::new(),
            fail_with: None,
        }
    }

    pub fn failing(error: NavigatorError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::at("/")
        }
    }

    fn check(&self) -> Result<(), NavigatorError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Navigator for FakeNavigator {
    async fn current_path(&self) -> String {
        self.path.clone()
    }

    async fn redirect(&mut self, path: &str) -> Result<(), NavigatorError> {
        self.check()?;
        self.path = path.to_string();
        self.performed.push(NavAction::RedirectPage {
            path: path.to_string(),
        });
        Ok(())
    }

    async fn activate_tab(&mut self, tab: &str) -> Result<bool, NavigatorError> {
        self.check()?;
        if !self.tabs_on_page.iter().any(|t| t == tab) {
            return Ok(false);
        }
        self.performed.push(NavAction::ActivateTab {
            tab: tab.to_string(),
        });
        Ok(true)
    }

    async fn open_external(&mut self, url: &str) -> Result<(), NavigatorError> {
        self.check()?;
        self.performed.push(NavAction::OpenExternal {
            url: url.to_string(),
        });
        Ok(())
    }
}
