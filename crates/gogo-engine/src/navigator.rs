use async_trait::async_trait;
use gogo_common::NavAction;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("Navigator is not ready")]
    NotReady,

    #[error("Blocked: {0}")]
    Blocked(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Navigator error: {0}")]
    Other(String),
}

/// Page-level side effects the assistant can trigger in the host app.
///
/// The dispatcher only talks to the app through this trait, so it can be
/// driven by a real view layer, the console front end or a test fake.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Path of the view currently shown (e.g. `/transport`).
    async fn current_path(&self) -> String;

    /// Replace the current view with the page at `path`.
    async fn redirect(&mut self, path: &str) -> Result<(), NavigatorError>;

    /// Activate the tab element addressed by `tab` in the current view.
    /// Returns `false` when the view has no such element.
    async fn activate_tab(&mut self, tab: &str) -> Result<bool, NavigatorError>;

    /// Open `url` in a new browsing context.
    async fn open_external(&mut self, url: &str) -> Result<(), NavigatorError>;

    /// Perform a [`NavAction`]. Returns `false` only for a missing tab element.
    async fn perform(&mut self, action: &NavAction) -> Result<bool, NavigatorError> {
        match action {
            NavAction::RedirectPage { path } => self.redirect(path).await.map(|_| true),
            NavAction::ActivateTab { tab } => self.activate_tab(tab).await,
            NavAction::OpenExternal { url } => self.open_external(url).await.map(|_| true),
        }
    }
}

#[derive(Debug, Error)]
#[error("Speech failed: {0}")]
pub struct SpeechError(pub String);

/// Text-to-speech output. Calls are fire-and-forget from the assistant.
#[async_trait]
pub trait Speaker: Send + Sync {
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;
}
